//! Plain-text table report, one row per tick

use crate::simulation::{Passenger, Route, SimOutcome, TickSnapshot};

/// Render passengers as `S(2)L(1)...`
pub fn format_passengers<'a>(passengers: impl IntoIterator<Item = &'a Passenger>) -> String {
    passengers.into_iter().map(|p| p.to_string()).collect()
}

/// Waiting queue column: the passengers, or `0` when nobody is waiting
fn format_queue(queue: &[Passenger]) -> String {
    if queue.is_empty() {
        "0".to_string()
    } else {
        format_passengers(queue)
    }
}

pub fn header() -> String {
    format!(
        "{:<6}{:<15}{:<6}{:<6}{:<6}{:<14}{:<14}{:<14}{:<8}{:<10}{:<8}{:<10}{:<8}{:<10}",
        "Time", "Next", "S", "L", "C", "WQS", "WQL", "WQC", "CS", "StatS", "CL", "StatL", "CC",
        "StatC"
    )
}

pub fn format_row(snapshot: &TickSnapshot) -> String {
    let [short, long, city] = Route::ALL.map(|route| snapshot.route(route));

    format!(
        "{:<6}{:<15}{:<6}{:<6}{:<6}{:<14}{:<14}{:<14}{:<8}{:<10}{:<8}{:<10}{:<8}{:<10}",
        snapshot.tick,
        format_passengers(&snapshot.arrivals),
        short.queue.len(),
        long.queue.len(),
        city.queue.len(),
        format_queue(&short.queue),
        format_queue(&long.queue),
        format_queue(&city.queue),
        short.capacity_remaining,
        short.status,
        long.capacity_remaining,
        long.status,
        city.capacity_remaining,
        city.status,
    )
}

/// Closing line for a finished run
pub fn format_outcome(outcome: &SimOutcome) -> String {
    match outcome {
        SimOutcome::Completed { tick } => format!(
            "Simulation ended at time {} - No more passengers to process.",
            tick
        ),
        SimOutcome::SafetyBound { ticks } => {
            format!("Warning: Simulation terminated after {} time units", ticks)
        }
    }
}
