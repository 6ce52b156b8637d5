//! Phase views
//!
//! Every interaction ends with a full re-render of the active phase.

use colored::Colorize;
use ppa_core::{DimensionGroup, Guidance, Phase, Session};
use ppa_dashboard::{Dashboard, SYSTEM_KEY};
use std::io::{self, Write};
use tabled::builder::Builder;
use tabled::settings::Style;

/// Render `phase` for the current session
///
/// # Errors
/// Propagates write failures
pub fn phase_view(
    out: &mut dyn Write,
    session: &Session,
    phase: Phase,
    selected: Option<&str>,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}  {}",
        format!("[{phase}]").dimmed(),
        format!("Active Projects: {}", session.project_count()).cyan()
    )?;

    if let Err(guidance) = phase.check(session.project_count()) {
        return guidance_view(out, guidance);
    }

    match phase {
        Phase::Elicitation => elicitation(out, session),
        Phase::Appraisal => appraisal(out, session, selected),
        Phase::Laddering => laddering(out, session),
        Phase::CrossImpact => cross_impact(out, session),
        Phase::Dashboard => dashboard(out, session),
    }
}

/// Render a guidance message
///
/// # Errors
/// Propagates write failures
pub fn guidance_view(out: &mut dyn Write, guidance: Guidance) -> io::Result<()> {
    writeln!(out, "{}", guidance.message().yellow())
}

fn heading(out: &mut dyn Write, title: &str) -> io::Result<()> {
    writeln!(out, "{}", title.bold())
}

fn elicitation(out: &mut dyn Write, session: &Session) -> io::Result<()> {
    heading(out, "Phase 1: The Brain Dump")?;
    writeln!(
        out,
        "Identify the extended sets of personally salient action in your life, from \
         daily maintenance (\"Walk the dog\") to defining life goals (\"Become a CEO\")."
    )?;
    writeln!(out, "Input at least 8-10 projects to get a valid system analysis.")?;
    writeln!(out)?;
    writeln!(out, "{}", "Your Portfolio".underline())?;

    if session.project_count() == 0 {
        writeln!(out, "{}", "No projects yet.".dimmed())?;
    }
    for (i, project) in session.projects().iter().enumerate() {
        writeln!(out, "  {}. {}", i + 1, project.name())?;
    }
    Ok(())
}

fn appraisal(out: &mut dyn Write, session: &Session, selected: Option<&str>) -> io::Result<()> {
    heading(out, "Phase 2: Project Appraisal")?;
    writeln!(out, "Rate your projects to uncover the hidden structure of your life.")?;
    writeln!(out)?;

    // `rate` targets the first project until one is selected
    let selected = selected.or_else(|| session.projects().iter().next().map(|p| p.name()));
    for (i, project) in session.projects().iter().enumerate() {
        let marker = if Some(project.name()) == selected { ">" } else { " " };
        writeln!(out, " {marker} {}. {}", i + 1, project.name())?;
    }

    let Some(name) = selected else {
        return Ok(());
    };
    let Ok(ratings) = session.ratings(name) else {
        return Ok(());
    };

    writeln!(out)?;
    writeln!(out, "{}", format!("Rating: {name}").bold().blue())?;

    let mut builder = Builder::default();
    builder.push_record(["Group", "Dimension", "Question", "Score"].map(String::from));
    for group in DimensionGroup::ALL {
        for dimension in group.dimensions() {
            builder.push_record([
                group.title().to_string(),
                dimension.label().to_string(),
                dimension.prompt().to_string(),
                ratings.get(*dimension).to_string(),
            ]);
        }
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    writeln!(out, "{table}")?;
    writeln!(out, "{}", "Ratings saved automatically.".green())
}

fn laddering(out: &mut dyn Write, session: &Session) -> io::Result<()> {
    heading(out, "Phase 3: The 'Why' Ladder")?;
    writeln!(
        out,
        "Connect your daily tasks to higher values. Ask \"Why am I doing this?\" until you reach a core value."
    )?;
    writeln!(out)?;

    for (rank, project) in session.ladder_candidates().iter().enumerate() {
        let name = project.name();
        writeln!(out, "{} {}", format!("{}.", rank + 1).bold(), format!("Laddering: {name}").bold())?;
        writeln!(
            out,
            "   Why is '{name}' important to you? (e.g., 'To feel secure', 'To be loved')"
        )?;
        match session.core_value(name) {
            Some(value) => writeln!(out, "   {} {}", "->".green(), value)?,
            None => writeln!(out, "   {}", "(no answer yet)".dimmed())?,
        }
    }
    Ok(())
}

fn cross_impact(out: &mut dyn Write, session: &Session) -> io::Result<()> {
    heading(out, "Phase 4: System Impact")?;
    writeln!(out, "Analyze how your projects affect each other.")?;
    writeln!(out, "  {} Helping each other.", "+1".green())?;
    writeln!(out, "  {} Hindering/Conflict.", "-1".red())?;
    writeln!(out, "   0 Neutral.")?;
    writeln!(out)?;

    let matrix = session.impact_matrix();
    let mut builder = Builder::default();
    let header = std::iter::once(String::new())
        .chain((1..=matrix.dimension()).map(|i| i.to_string()));
    builder.push_record(header);

    for (r, name) in matrix.names().iter().enumerate() {
        let cells = matrix
            .row(r)
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(c, impact)| if r == c { "-".to_string() } else { impact.to_string() });
        builder.push_record(std::iter::once(format!("{}. {name}", r + 1)).chain(cells));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    writeln!(out, "{table}")?;
    writeln!(out, "{}", "Rows influence columns: impact <row> <column> <-1|0|1>".dimmed())
}

fn dashboard(out: &mut dyn Write, session: &Session) -> io::Result<()> {
    let dashboard = match Dashboard::from_session(session) {
        Ok(dashboard) => dashboard,
        Err(guidance) => return guidance_view(out, guidance),
    };

    heading(out, "Executive System Audit")?;
    writeln!(out)?;

    writeln!(out, "{}", "1. Your Project Ecology Map".underline())?;
    let ecology = dashboard.ecology();
    for node in ecology.nodes() {
        let label = if node.high_stress {
            format!("[{}]", node.name).red().bold()
        } else {
            format!("[{}]", node.name).blue()
        };
        writeln!(out, "  {label}")?;
    }
    for (source, target, impact) in ecology.edges() {
        let arrow = match impact {
            ppa_core::Impact::Synergy => "──▶".green(),
            _ => "╌╌▶".red(),
        };
        writeln!(out, "  {source} {arrow} {target}")?;
    }
    writeln!(
        out,
        "  {} synergies, {} conflicts",
        ecology.synergy_count(),
        ecology.conflict_count()
    )?;
    writeln!(out, "{}", "System Key".dimmed())?;
    for (symbol, meaning) in SYSTEM_KEY {
        writeln!(out, "  {symbol}: {meaning}")?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "2. The Meaning vs. Stress Matrix".underline())?;
    let scatter = dashboard.scatter();
    writeln!(out, "  {}", scatter.title)?;
    for point in &scatter.points {
        writeln!(
            out,
            "  {:<24} stress {:>5.2}  meaning {:>5.2}  efficacy {:>5.2}  community {:>5.2}",
            point.name, point.stress, point.meaning, point.efficacy, point.community
        )?;
    }
    let at_risk: Vec<&str> = scatter.at_risk().map(|p| p.name.as_str()).collect();
    if !at_risk.is_empty() {
        writeln!(out, "  {} {}", "Low meaning:".red(), at_risk.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "3. Project Metrics".underline())?;
    let highlight = colored::control::SHOULD_COLORIZE.should_colorize();
    writeln!(out, "{}", dashboard.report_table(highlight))?;
    let stressed: Vec<&str> = dashboard
        .rows()
        .iter()
        .filter(|row| row.high_stress)
        .map(|row| row.name.as_str())
        .collect();
    if !highlight && !stressed.is_empty() {
        writeln!(out, "  High stress: {}", stressed.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "{}", "4. Submission Export".underline())?;
    writeln!(out, "  export csv | export dot | export scatter [path]")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(session: &Session, phase: Phase, selected: Option<&str>) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        phase_view(&mut buf, session, phase, selected).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_portfolio() {
        let text = render(&Session::new(), Phase::Elicitation, None);
        assert!(text.contains("Active Projects: 0"));
        assert!(text.contains("No projects yet."));
    }

    #[test]
    fn guidance_replaces_views() {
        let mut session = Session::new();
        assert!(render(&session, Phase::Appraisal, None).contains("Please add projects in Phase 1 first."));
        assert!(render(&session, Phase::Laddering, None).contains("Go back to Phase 1."));
        assert!(render(&session, Phase::Dashboard, None).contains("No data."));
        session.add_project("only");
        assert!(render(&session, Phase::CrossImpact, None).contains("Need at least 2 projects."));
    }

    #[test]
    fn appraisal_lists_groups() {
        let mut session = Session::new();
        session.add_project("Garden");
        let text = render(&session, Phase::Appraisal, Some("Garden"));
        assert!(text.contains("Rating: Garden"));
        assert!(text.contains("Efficacy & Stress"));
        assert!(text.contains("Do you have enough time?"));
    }

    #[test]
    fn appraisal_defaults_to_first_project() {
        let mut session = Session::new();
        session.add_project("Garden");
        session.add_project("Run");
        let text = render(&session, Phase::Appraisal, None);
        assert!(text.contains(" > 1. Garden"));
        assert!(text.contains("   2. Run"));
        assert!(text.contains("Rating: Garden"));
    }

    #[test]
    fn dashboard_sections() {
        let mut session = Session::new();
        session.add_project("a");
        session.add_project("b");
        session
            .set_impact("a", "b", ppa_core::Impact::Synergy)
            .unwrap();
        let text = render(&session, Phase::Dashboard, None);
        assert!(text.contains("1. Your Project Ecology Map"));
        assert!(text.contains("1 synergies, 0 conflicts"));
        assert!(text.contains("3. Project Metrics"));
        assert!(!text.contains("Community"));
        assert!(!text.contains("High stress:"));
    }

    #[test]
    fn dashboard_flags_high_stress() {
        let mut session = Session::new();
        session.add_project("calm");
        session.add_project("frantic");
        for dimension in [ppa_core::Dimension::Difficulty, ppa_core::Dimension::Challenge] {
            session
                .set_rating("frantic", dimension, ppa_core::Rating::new(10).unwrap())
                .unwrap();
        }
        let text = render(&session, Phase::Dashboard, None);
        assert!(text.contains("High stress: frantic"));
    }
}
