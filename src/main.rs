use std::{env::args, fs, process::exit, thread, time::Duration};

use cellrs::{view, Grid, Result, RuleOverride, Sim, Step};

const SIM_TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// Reads a pattern of letter codes, one row per line, padding short rows with empties.
fn deserialize(content: &str) -> (usize, usize, String) {
    let rows: Vec<&str> = content.lines().map(str::trim_end).collect();
    let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
    let mut codes = String::with_capacity(width * rows.len());
    for row in &rows {
        codes.push_str(row);
        codes.extend(std::iter::repeat('e').take(width - row.chars().count()));
    }
    (width, rows.len(), codes)
}

fn run(pattern_path: &str, rules_path: Option<&str>) -> Result<()> {
    let content = fs::read_to_string(pattern_path)?;
    let (width, height, codes) = deserialize(&content);
    let mut grid = Grid::new(width, height, Some(codes.into()))?;

    let rules = match rules_path {
        Some(path) => RuleOverride::load(path)?,
        None => RuleOverride::default(),
    };
    grid.set_rules(&rules);
    log::info!("running a {width}x{height} grid with {:?}", grid.rules());

    let mut simulation = Sim::new(grid);
    loop {
        view::display(simulation.grid())?;
        thread::sleep(SIM_TICK_INTERVAL);
        if let Step::Repeating { period } = simulation.step()? {
            view::display(simulation.grid())?;
            println!(
                "pattern repeats every {period} generation(s) after {} generation(s)",
                simulation.generation()
            );
            return Ok(());
        }
    }
}

pub fn main() {
    env_logger::init();

    let pattern_path = args().nth(1).unwrap_or_else(|| {
        eprintln!("[error] must provide a path argument");
        exit(1);
    });
    let rules_path = args().nth(2);

    if let Err(error) = run(&pattern_path, rules_path.as_deref()) {
        eprintln!("[error] {error}");
        exit(1);
    }
}

#[test]
fn test_deserialize() {
    let (width, height, codes) = deserialize("aea\nd\n\neo\n");
    assert_eq!((width, height), (3, 4));
    assert_eq!(codes, "aeadeeeeeeoe");

    let (width, height, _) = deserialize("");
    assert_eq!((width, height), (0, 0));
}
