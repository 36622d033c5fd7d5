use catalog::media;
use shared::{
    domain::{Athlete, Discipline},
    navigation::CategoryFilter,
};
use tracing::warn;
use view_model::CatalogViewModel;

use crate::ui::{
    widgets::{pill_row, schedule_stamp, score, star, Screen},
    ScreenOptions,
};

const GAMES_TITLE: &str = "OLYMPIC WINTER GAMES";
const GAMES_SUBTITLE: &str = "February 6-19, 2026 • Milano Ice Skating Arena";

fn athlete_row(vm: &CatalogViewModel, athlete: &Athlete) -> String {
    let country = vm.catalog().country_or_placeholder(&athlete.country);
    format!(
        "{} {} {} · {}  ({})",
        star(vm.is_favorite(&athlete.id)),
        country.flag,
        athlete.name,
        athlete.event_name,
        athlete.id
    )
}

pub fn home(vm: &CatalogViewModel, options: &ScreenOptions) -> String {
    let catalog = vm.catalog();
    let stats = catalog.stats();
    let mut screen = Screen::new();

    screen.line(GAMES_TITLE);
    screen.title("Figure Skating");
    screen.line(GAMES_SUBTITLE);
    screen.line(format!(
        "{} Events · {} Athletes · {} Nations",
        stats.events, stats.athletes, stats.nations
    ));

    let featured = vm.featured_athletes(options.featured_limit);
    if !featured.is_empty() {
        screen.section("Top Contenders");
        for athlete in featured {
            let country = catalog.country_or_placeholder(&athlete.country);
            screen.line(format!(
                "{} {}  ({})",
                country.flag,
                athlete.competitors.short_label(),
                athlete.id
            ));
        }
    }

    screen.section("Events");
    for event in catalog.events() {
        screen.line(format!(
            "{} {} · {}  ({})",
            event.icon, event.name, event.dates, event.id
        ));
    }

    screen.finish()
}

pub fn events(vm: &CatalogViewModel) -> String {
    let mut screen = Screen::new();
    screen.title("Schedule");

    for event in vm.catalog().events() {
        screen.blank();
        screen.line(format!("{} {}  ({})", event.icon, event.name, event.id));
        screen.line(format!("   {} · {}", event.dates, event.description));
        let medal = event
            .medal_segment()
            .map(|segment| format!(" · medals {}", schedule_stamp(segment)))
            .unwrap_or_default();
        screen.line(format!("   {} segments{medal}", event.segments.len()));
    }

    screen.finish()
}

pub fn event_detail(vm: &CatalogViewModel, options: &ScreenOptions) -> String {
    let mut screen = Screen::new();
    let Some(event) = vm.selected_event() else {
        screen.line("No event selected.");
        return screen.finish();
    };

    screen.title(format!("{} {}", event.icon, event.name));
    screen.line(format!("{} · {}", event.dates, event.description));

    screen.section("Schedule");
    for segment in &event.segments {
        let medal = if segment.is_medal { "  🏅 Medal" } else { "" };
        screen.line(format!(
            "{}  {}{medal}",
            schedule_stamp(segment),
            segment.name
        ));
    }

    let roster = vm.event_roster(&event.id);
    screen.section(format!("Athletes ({})", roster.len()));
    for athlete in roster.iter().take(options.roster_preview_limit) {
        let country = vm.catalog().country_or_placeholder(&athlete.country);
        screen.line(format!(
            "{} {} · {}  ({})",
            country.flag, athlete.name, country.name, athlete.id
        ));
    }
    if roster.len() > options.roster_preview_limit {
        screen.line(format!("View all {} athletes: all", roster.len()));
    }

    screen.finish()
}

pub fn athletes(vm: &CatalogViewModel, category: &CategoryFilter) -> String {
    let visible = vm.visible_athletes(category);
    let mut screen = Screen::new();

    screen.title(format!("Athletes ({})", visible.len()));
    if !vm.search_query().is_empty() {
        screen.line(format!("search: {:?}", vm.search_query()));
    }

    let events = vm.catalog().events();
    let pills = std::iter::once(("All", *category == CategoryFilter::All)).chain(
        events
            .iter()
            .filter(|event| Discipline::from_event_id(&event.id).is_some())
            .map(|event| {
                let selected =
                    matches!(category, CategoryFilter::Event(id) if *id == event.id);
                (event.name.as_str(), selected)
            }),
    );
    screen.line(pill_row(pills));
    screen.blank();

    if visible.is_empty() {
        screen.line("No athletes match.");
    }
    for athlete in visible {
        screen.line(athlete_row(vm, athlete));
    }

    screen.finish()
}

pub fn athlete_detail(vm: &CatalogViewModel, options: &ScreenOptions) -> String {
    let mut screen = Screen::new();
    let Some(athlete) = vm.selected_athlete() else {
        screen.line("No athlete selected.");
        return screen.finish();
    };
    let country = vm.catalog().country_or_placeholder(&athlete.country);
    let discipline = athlete.discipline();
    let (first_label, second_label) = discipline.phase_labels();

    screen.title(format!(
        "{} {}",
        athlete.name,
        star(vm.is_favorite(&athlete.id))
    ));
    if let Some(nickname) = &athlete.nickname {
        screen.line(format!("\"{nickname}\""));
    }
    screen.line(format!(
        "{} {} · {}",
        country.flag, country.name, athlete.event_name
    ));
    if athlete.top_contender {
        let ranking = athlete
            .world_ranking
            .map(|rank| format!(" · #{rank} World"))
            .unwrap_or_default();
        screen.line(format!("🔥 Top Contender{ranking}"));
    }

    if let Some(best) = athlete.performance.season_best() {
        screen.section("Season Best");
        screen.line(format!("{}  ({})", score(best.total), best.competition));
        screen.line(format!("{first_label}: {}", score(best.first_phase)));
        screen.line(format!("{second_label}: {}", score(best.second_phase)));
    }

    if let Some(planned) = athlete.performance.planned_elements() {
        screen.section("Planned Elements");
        if !planned.short_program.is_empty() {
            screen.line(format!(
                "{first_label}: {}",
                planned.short_program.join("  ")
            ));
        }
        if !planned.free_skating.is_empty() {
            let shown: Vec<&str> = planned
                .free_skating
                .iter()
                .take(options.free_program_preview)
                .map(String::as_str)
                .collect();
            let hidden = planned.free_skating.len() - shown.len();
            let more = if hidden > 0 {
                format!("  +{hidden}")
            } else {
                String::new()
            };
            screen.line(format!("{second_label}: {}{more}", shown.join("  ")));
        }
        screen.line("element <code> explains a jump or lift");
    }

    if !athlete.achievements.is_empty() {
        screen.section("Achievements");
        for achievement in &athlete.achievements {
            screen.line(achievement.as_str());
        }
    }

    if let Some(programs) = athlete.performance.programs() {
        screen.section("Programs");
        screen.line(format!(
            "{first_label}: {} · {}",
            programs.first_phase.title, programs.first_phase.music
        ));
        screen.line(format!(
            "{second_label}: {} · {}",
            programs.second_phase.title, programs.second_phase.music
        ));
    }

    if let Some(bio) = &athlete.bio {
        screen.section("About");
        screen.line(bio.as_str());
    }

    match media::portraits(athlete, &country, &options.media) {
        Ok(portraits) => {
            screen.section("Photos");
            for portrait in portraits {
                screen.line(format!("{}: {}", portrait.person, portrait.thumbnail));
                screen.line(format!("   fallback {}", portrait.fallback));
            }
        }
        Err(err) => warn!(athlete = %athlete.id, error = %err, "portrait sources unavailable"),
    }

    screen.finish()
}

pub fn favorites(vm: &CatalogViewModel) -> String {
    let saved = vm.favorite_athletes();
    let mut screen = Screen::new();
    screen.title(format!("Saved Athletes ({})", saved.len()));

    if saved.is_empty() {
        screen.line("No saved athletes yet. Use 'fav <id>' or 'fav' on an athlete page.");
    }
    for athlete in saved {
        screen.line(athlete_row(vm, athlete));
    }

    screen.finish()
}

pub fn element_card(vm: &CatalogViewModel) -> Option<String> {
    let info = vm.element_info()?;
    let mut screen = Screen::new();
    screen.section(format!("Element {}", info.code));
    screen.line(info.explanation);
    screen.line("close: dismiss");
    Some(screen.finish())
}
