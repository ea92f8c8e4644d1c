//! HTML fragments for each page state.

use super::PageState;
use crate::i18n::{back_link, invested_in, t};
use falah_content::{resolve::split_display_name, ResolvedMember, ResolvedProject};
use falah_core::Locale;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `color` if it is a hex color (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) or a
/// bare CSS color keyword, else `None`.
fn css_color(color: &str) -> Option<&str> {
    let valid = match color.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => !color.is_empty() && color.bytes().all(|b| b.is_ascii_alphabetic()),
    };
    valid.then_some(color)
}

pub(super) fn render_portfolio(state: &PageState<ResolvedProject>, locale: Locale) -> String {
    match state {
        PageState::Loading => format!(
            "<div class=\"page-loading\"><p>{}</p></div>",
            t("loading", locale)
        ),
        PageState::NotFound => format!(
            "<div class=\"page-not-found\">\
             <h1>{}</h1>\
             <p>{}</p>\
             <a href=\"/portfolio\">{}</a>\
             </div>",
            t("project_not_found", locale),
            t("project_not_found_body", locale),
            t("back_to_portfolio", locale),
        ),
        PageState::Found(project) => render_project(project, locale),
    }
}

fn render_project(project: &ResolvedProject, locale: Locale) -> String {
    let title = escape_html(&project.title);
    let mut out = String::new();
    out.push_str("<section class=\"portfolio-detail\">");
    out.push_str(&format!("<h1>{title}</h1>"));

    out.push_str("<div class=\"badges\">");
    for badge in &project.badges {
        let label = escape_html(&badge.label);
        match css_color(&badge.color) {
            Some(color) => out.push_str(&format!(
                "<span class=\"badge\" style=\"background-color: {color}20; color: {color}; border: 1px solid {color}40\">{label}</span>"
            )),
            None => out.push_str(&format!("<span class=\"badge\">{label}</span>")),
        }
    }
    out.push_str("</div>");

    if let Some(year) = project.investment_year {
        out.push_str(&format!(
            "<div class=\"invested\">{}</div>",
            escape_html(&invested_in(locale, year))
        ));
    }

    if let Some(ref image) = project.hero_image {
        out.push_str(&format!(
            "<img class=\"hero\" src=\"{}\" alt=\"{title}\" width=\"1200\" height=\"600\">",
            escape_html(image)
        ));
    }

    out.push_str("<div class=\"sections\">");
    for section in &project.sections {
        out.push_str("<div class=\"section\">");
        if !section.title.is_empty() {
            out.push_str(&format!("<h2>{}</h2>", escape_html(&section.title)));
        }
        if !section.text.is_empty() {
            out.push_str(&format!("<p>{}</p>", escape_html(&section.text)));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");

    out.push_str(&format!(
        "<a class=\"back\" href=\"/portfolio\">{}</a>",
        back_link(locale, "back_to_portfolio")
    ));
    out.push_str("</section>");
    out
}

pub(super) fn render_team(state: &PageState<ResolvedMember>, locale: Locale) -> String {
    match state {
        PageState::Found(member) => render_member(member),
        PageState::Loading | PageState::NotFound => format!(
            "<div class=\"page-not-found\"><h1>{}</h1><a href=\"/team\">{}</a></div>",
            t("member_not_found", locale),
            back_link(locale, "back_to_team"),
        ),
    }
}

fn render_member(member: &ResolvedMember) -> String {
    let (first, rest) = split_display_name(&member.name);
    let name = escape_html(&member.name);
    format!(
        "<section class=\"team-member\">\
         <div class=\"headline\"><h1>{}<br>{}</h1><div class=\"role\">{}</div></div>\
         <div class=\"photo\"><img src=\"{}\" alt=\"{name}\"></div>\
         <div class=\"bio\"><p>{}</p><p>{}</p></div>\
         </section>",
        escape_html(first),
        escape_html(rest),
        escape_html(&member.role),
        escape_html(&member.photo),
        escape_html(&member.bio_left),
        escape_html(&member.bio_right),
    )
}
