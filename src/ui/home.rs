//! Landing screen. Static content, no data dependency.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::ui::app::Route;
use crate::ui::components::centered_rect_by_size;
use crate::ui::mvi::{Intent, Reducer, UiState};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, CATALOGUE_PURPLE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    STATUS_ERROR, STATUS_OK,
};

pub struct Feature {
    pub name: &'static str,
    pub description: &'static str,
    pub route: Route,
}

pub const FEATURES: [Feature; 2] = [
    Feature {
        name: "Inventory Overview",
        description: "View and manage your entire inventory efficiently",
        route: Route::Inventory,
    },
    Feature {
        name: "Catalogue Overview",
        description: "Explore your inventory in a structured format",
        route: Route::Catalogue,
    },
];

struct QuickStat {
    name: &'static str,
    value: &'static str,
    change: &'static str,
    increase: bool,
}

const QUICK_STATS: [QuickStat; 4] = [
    QuickStat { name: "Total Products", value: "1,234", change: "+12%", increase: true },
    QuickStat { name: "Low Stock Items", value: "24", change: "+3", increase: true },
    QuickStat { name: "Out of Stock", value: "5", change: "-2", increase: false },
    QuickStat { name: "Categories", value: "12", change: "+2", increase: true },
];

const RECENT_ACTIVITY: [(&str, &str); 3] = [
    ("Updated inventory levels", "2 minutes ago"),
    ("New product added", "1 hour ago"),
    ("Low stock alert", "3 hours ago"),
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub selected: usize,
}

impl UiState for HomeState {}

impl HomeState {
    pub fn selected_route(&self) -> Route {
        FEATURES[self.selected.min(FEATURES.len() - 1)].route
    }
}

#[derive(Debug, Clone)]
pub enum HomeIntent {
    MoveUp,
    MoveDown,
}

impl Intent for HomeIntent {}

pub struct HomeReducer;

impl Reducer for HomeReducer {
    type State = HomeState;
    type Intent = HomeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let selected = match intent {
            HomeIntent::MoveUp if state.selected == 0 => FEATURES.len() - 1,
            HomeIntent::MoveUp => state.selected - 1,
            HomeIntent::MoveDown => (state.selected + 1) % FEATURES.len(),
        };
        HomeState { selected }
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &HomeState) {
    let area = centered_rect_by_size(area, 96, area.height);
    let [hero, stats, features, activity] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Length(FEATURES.len() as u16 * 2 + 2),
        Constraint::Min(0),
    ])
    .areas(area);

    let hero_widget = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Welcome to ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                "RetailFlow",
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(
            "Real-time inventory management for smarter, faster decisions.",
            Style::default().fg(MUTED_TEXT),
        ),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM).border_style(Style::default().fg(GLOBAL_BORDER)));
    frame.render_widget(hero_widget, hero);

    let stat_areas = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(stats);
    for (stat, cell) in QUICK_STATS.iter().zip(stat_areas.iter()) {
        let (arrow, color) = if stat.increase {
            ("↑", STATUS_OK)
        } else {
            ("↓", STATUS_ERROR)
        };
        let widget = Paragraph::new(vec![
            Line::styled(stat.name, Style::default().fg(MUTED_TEXT)),
            Line::styled(
                stat.value,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                format!("{} {} this month", arrow, stat.change),
                Style::default().fg(color),
            ),
        ])
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(GLOBAL_BORDER)));
        frame.render_widget(widget, *cell);
    }

    let mut feature_lines = Vec::new();
    for (index, feature) in FEATURES.iter().enumerate() {
        let accent = match feature.route {
            Route::Catalogue => CATALOGUE_PURPLE,
            _ => BRAND_BLUE,
        };
        let mut name = Line::from(vec![
            Span::styled(if index == state.selected { " ▶ " } else { "   " }, Style::default().fg(accent)),
            Span::styled(feature.name, Style::default().fg(accent).add_modifier(Modifier::BOLD)),
        ]);
        let mut description =
            Line::styled(format!("   {}", feature.description), Style::default().fg(MUTED_TEXT));
        if index == state.selected {
            name = name.style(Style::default().bg(ACTIVE_HIGHLIGHT));
            description = description.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        feature_lines.push(name);
        feature_lines.push(description);
    }
    frame.render_widget(
        Paragraph::new(feature_lines).block(
            Block::default()
                .title(" Features ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        features,
    );

    let activity_lines: Vec<Line> = RECENT_ACTIVITY
        .iter()
        .map(|(name, time)| {
            Line::from(vec![
                Span::styled(format!(" • {:<32}", name), Style::default().fg(HEADER_TEXT)),
                Span::styled(*time, Style::default().fg(MUTED_TEXT)),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(activity_lines).block(
            Block::default()
                .title(" Recent Activity ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        activity,
    );
}
