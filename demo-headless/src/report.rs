//! Plain-text reports

use chrono::NaiveDate;
use fallout_core::planner::RankedPrediction;
use fallout_core::season::MigrationStatus;
use fallout_core::{Coordinate, DailyPrediction, TripPlan};

pub fn print_predictions(coord: Coordinate, predictions: &[DailyPrediction]) {
    println!("=== Fallout Outlook: {coord} ===\n");
    if predictions.is_empty() {
        println!("Forecast contains no hours.");
        return;
    }

    for p in predictions {
        println!(
            "{}  {:>3}/100  {:<11} {:<6} confidence  {}",
            p.prediction_date,
            p.overall_score,
            p.score_label.as_str(),
            p.confidence.to_string(),
            p.summary
        );
        for (key, factor) in p.factors.iter() {
            println!(
                "    {:<14} {:>2}/{:<2} {}  {}",
                key.info().label,
                factor.score,
                key.max_score(),
                factor_bar(factor.fraction_of(key)),
                factor.description
            );
        }
    }
}

const BAR_WIDTH: usize = 10;

/// Fixed-width bar, e.g. `[######    ]` for 0.6.
fn factor_bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled))
}

pub fn print_top(date: NaiveDate, ranked: &[RankedPrediction<'_>]) {
    println!("=== Top Hotspots for {date} ===\n");
    for (rank, entry) in ranked.iter().enumerate() {
        let p = entry.prediction;
        // Hotspots without a prediction for the day fall back to their first day.
        let shown = if p.prediction_date == date {
            String::new()
        } else {
            format!(" (from {})", p.prediction_date)
        };
        println!(
            "{:>2}. {:<32} {:>2}  {:>3}/100  {}{shown}",
            rank + 1,
            entry.hotspot.name,
            entry.hotspot.state,
            p.overall_score,
            p.score_label
        );
    }
}

pub fn print_plan(plan: &TripPlan) {
    println!("=== Trip Planner ===\n");

    let header: String = plan
        .dates
        .iter()
        .map(|d| format!(" {:>5}", d.format("%m-%d")))
        .collect();
    println!("{:<32}{header}", "Hotspot");

    for row in &plan.rows {
        let cells: String = row
            .cells
            .iter()
            .map(|cell| match cell {
                Some(p) => format!(" {:>5}", p.overall_score),
                None => format!(" {:>5}", "-"),
            })
            .collect();
        println!("{:<32}{cells}", row.hotspot.name);
    }

    println!();
    match &plan.best_overall {
        Some(best) => println!("Best overall: {} on {} ({})", best.hotspot, best.date, best.score),
        None => println!("Best overall: none"),
    }
    for (date, best) in &plan.best_by_date {
        if let Some(best) = best {
            println!("  {date}: {} ({})", best.hotspot, best.score);
        }
    }
}

pub fn print_status(date: NaiveDate, status: &MigrationStatus) {
    println!("{date}: {}", status.label);
    println!("  {}", status.message);
    println!(
        "  Season: {} (seasonal multiplier {:.2})",
        status.season,
        status.season.seasonal_multiplier()
    );
}
