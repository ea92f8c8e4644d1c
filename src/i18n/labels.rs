//! Page chrome labels.

use falah_core::Locale;

pub(super) fn lookup(key: &str, locale: Locale) -> Option<&'static str> {
    let s = match key {
        // --- Portfolio ---
        "loading" => match locale {
            Locale::Ru => "Загрузка...",
            Locale::Kz => "Жүктелуде...",
            Locale::En => "Loading...",
        },
        "project_not_found" => match locale {
            Locale::Ru => "Проект не найден",
            Locale::Kz => "Жоба табылмады",
            Locale::En => "Project Not Found",
        },
        "project_not_found_body" => match locale {
            Locale::Ru => "Запрошенный проект портфолио не существует.",
            Locale::Kz => "Сұралған портфолио жобасы жоқ.",
            Locale::En => "The requested portfolio project does not exist.",
        },
        "back_to_portfolio" => match locale {
            Locale::Ru => "Назад к портфолио",
            Locale::Kz => "Портфолиоға оралу",
            Locale::En => "Back to Portfolio",
        },
        "invested_in" => match locale {
            Locale::Ru => "Инвестировано в",
            Locale::Kz => "Инвестиция жылы",
            Locale::En => "Invested in",
        },
        // --- Team ---
        "member_not_found" => match locale {
            Locale::Ru => "Сотрудник не найден",
            Locale::Kz => "Қызметкер табылмады",
            Locale::En => "Member not found",
        },
        "back_to_team" => match locale {
            Locale::Ru => "Назад к команде",
            Locale::Kz => "Командаға оралу",
            Locale::En => "Back to Team",
        },
        _ => return None,
    };
    Some(s)
}
