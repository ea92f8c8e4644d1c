//! The four team members compiled into the site.
//!
//! These are the English defaults every other team source falls back to.

use falah_core::slug::member_slug;

/// Photo shown when no source provides one.
pub const PLACEHOLDER_PHOTO: &str = "/placeholder.svg";

/// A compiled team member. Text is English only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticMember {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub role: &'static str,
    pub photo: &'static str,
    pub bio_left: &'static str,
    pub bio_right: &'static str,
}

impl StaticMember {
    /// URL slug derived from the full name.
    pub fn slug(&self) -> String {
        member_slug(self.first_name, self.last_name)
    }

    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Compiled team, in listing order.
pub const MEMBERS: &[StaticMember] = &[
    StaticMember {
        first_name: "Nurlan",
        last_name: "Kussainov",
        role: "Managing Partner",
        photo: "/placeholder.svg",
        bio_left: "Nurlan has more than two decades of leadership across Kazakhstan’s financial sector and public institutions. His experience spans the Astana International Financial Centre, the National Bank of Kazakhstan, the Development Bank of Kazakhstan, the Center of Marketing and Analytical Research under the Government of Kazakhstan, CNRG Capital and the Ministry of Economic Affairs and Budget Planning.",
        bio_right: "He holds a master’s degree from the Stanford Graduate School of Business. Nurlan serves on the boards of the Astana International Exchange (a Nasdaq subsidiary) and Beeline Kazakhstan. Previously he was Chairman of the Board of Directors at Alfa‑Bank Kazakhstan, CEO of AIFC and the Development Bank of Kazakhstan, and Deputy Governor of the Central Bank of Kazakhstan.",
    },
    StaticMember {
        first_name: "Diyar",
        last_name: "Medeubekov",
        role: "Chief Investment Officer",
        photo: "/placeholder.svg",
        bio_left: "Diyar oversees investment strategy and has managed several of the fund’s portfolio companies. He brings deep operating and financial experience across mining, agriculture and financial services, and earlier served as Director of Project Finance at the Development Bank of Kazakhstan. He holds a master’s degree in Economics from Vanderbilt University.",
        bio_right: "Alongside his work with the fund, Diyar has founded and scaled technology ventures, including the fintech platforms Pulman.uz in Uzbekistan and Akshamat.kz in Kazakhstan, as well as the AI software company Fantoramma.org. He previously led Alsad.kz as CEO and held roles at the Islamic Development Bank and the Development Bank of Kazakhstan.",
    },
    StaticMember {
        first_name: "Altay",
        last_name: "Mamanbayev",
        role: "Chief Operating Officer",
        photo: "/placeholder.svg",
        bio_left: "Altay has led the fund’s operations since 2008. Before joining Al Falah, he worked as a financial consultant at Eurasia Financial Management Consulting and held managerial positions at Panalpina World Transport LLP in Kazakhstan, one of the world’s leading freight‑forwarding corporations.",
        bio_right: "A fellow of the ACCA and a certified auditor, Altay has over twenty years of experience in finance. His expertise covers corporate governance, taxation, budgeting, audit, reporting and regulatory compliance. He has held leadership roles at Al Falah Group and Panalpina.",
    },
    StaticMember {
        first_name: "Azhar",
        last_name: "Babayeva",
        role: "Reporting Manager",
        photo: "/placeholder.svg",
        bio_left: "Azhar joined Al Falah in October 2013 and today oversees financial reporting and compliance. She has more than fifteen years of experience across finance, audit, tax, budgeting and fund administration, and began her career as an auditor at EY Kazakhstan.",
        bio_right: "Azhar earned both her bachelor’s and master’s degrees from KIMEP University and is currently pursuing the ACCA professional qualification.",
    },
];

/// Find the compiled member whose derived slug equals `slug`.
pub fn find_static_member(slug: &str) -> Option<&'static StaticMember> {
    MEMBERS.iter().find(|m| m.slug() == slug)
}
