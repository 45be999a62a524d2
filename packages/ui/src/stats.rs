//! Which dashboard figures a role sees, and how they are formatted.

use api::{Role, Stats};

#[derive(Debug, Clone, PartialEq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatSection {
    pub title: &'static str,
    pub tiles: Vec<StatTile>,
}

fn tile(label: &'static str, value: String) -> StatTile {
    StatTile { label, value }
}

fn count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn money(value: f64) -> String {
    format!("{value:.2} USD")
}

/// Organisation figures for admins, team figures for managers, and personal
/// figures for everyone. A section the backend left out shows zeros.
pub fn stat_sections(role: Role, stats: &Stats) -> Vec<StatSection> {
    let mut sections = Vec::with_capacity(2);

    match role {
        Role::Admin => {
            let org = stats.organization.unwrap_or_default();
            sections.push(StatSection {
                title: "Organization Stats",
                tiles: vec![
                    tile("Total feedback received", count(org.total_feedback_received)),
                    tile("Total work hours", count(org.total_work_hours)),
                    tile("Total disbursements this month", money(org.total_disbursements)),
                ],
            });
        }
        Role::Manager => {
            let team = stats.team.unwrap_or_default();
            sections.push(StatSection {
                title: "Team Stats",
                tiles: vec![
                    tile("Total feedback received", count(team.total_feedback_received)),
                    tile("Total work hours", count(team.total_work_hours)),
                    tile("Total disbursements this month", money(team.total_disbursements)),
                ],
            });
        }
        Role::Employee => {}
    }

    let personal = stats.personal.unwrap_or_default();
    sections.push(StatSection {
        title: "Your Stats",
        tiles: vec![
            tile("Total feedback shared", count(personal.total_feedback_shared)),
            tile("Total hours worked", count(personal.total_hours_worked)),
            tile("Total earnings this month", money(personal.total_earnings)),
        ],
    });

    sections
}
