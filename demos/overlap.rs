use tracing_subscriber::EnvFilter;

use timezone_overlap::{
    find_city, format_hour, format_range, format_utc_offset, CellState, MemoryStore,
    OverlapMode, OverlapSummary, TimezoneChecker,
};

fn main() -> timezone_overlap::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut checker = TimezoneChecker::load(MemoryStore::new());
    if let Some(london) = find_city("London") {
        checker.add_city(london)?;
    }

    let now = chrono::Utc::now();
    let format = checker.settings().time_format;

    for mode in [OverlapMode::Meeting, OverlapMode::Base] {
        checker.set_mode(mode)?;
        println!("=== {:?} mode ===", mode);

        for row in checker.rows_at(now)? {
            let marker = if row.is_reference { " (ref)" } else { "" };
            println!(
                "{:<14}{:<6} {:<9}",
                row.city.name,
                marker,
                format_utc_offset(row.utc_offset)
            );
            let line: Vec<String> = row
                .cells
                .iter()
                .map(|cell| {
                    let label = format_hour(cell.local_hour, format);
                    match cell.state {
                        CellState::Overlap => format!("[{}]", label),
                        CellState::Awake => format!(" {} ", label),
                        CellState::Asleep => " .. ".to_string(),
                    }
                })
                .collect();
            println!("  {}", line.join(""));
        }

        match checker.summary_at(now)? {
            Some(OverlapSummary::Meeting {
                reference,
                total_hours,
                ranges,
            }) => {
                let labels: Vec<String> =
                    ranges.iter().map(|r| format_range(r, format)).collect();
                println!(
                    "{}h overlap: {} ({} time)",
                    total_hours,
                    labels.join(", "),
                    reference.name
                );
            }
            Some(OverlapSummary::Base { reference, cities }) => {
                for c in cities {
                    let labels: Vec<String> =
                        c.ranges.iter().map(|r| format_range(r, format)).collect();
                    println!("{}: {}h {}", c.city.name, c.total_hours, labels.join(", "));
                }
                println!("({} time)", reference.name);
            }
            None => println!("Add cities to compare timezones"),
        }
        println!();
    }

    Ok(())
}
