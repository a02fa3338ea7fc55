// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::Path;

const IN_MARKUP: &str = "map.html";
const OUT_FRAGMENT: &str = "map_paths.jsx";

fn main() {
    if let Ok(()) = log::set_logger(&LOGGER) {
        log::set_max_level(log::LevelFilter::Warn);
    }

    if let Err(e) = process() {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn process() -> Result<(), String> {
    let content = svgpaths::load(Path::new(IN_MARKUP)).map_err(|e| e.to_string())?;

    let records: Vec<_> = svgpaths::extract(&content).collect();
    println!("Found {} paths", records.len());

    let fragment = svgpaths::format(records);
    let out_path = std::env::temp_dir().join(OUT_FRAGMENT);
    svgpaths::save(&fragment, &out_path).map_err(|e| e.to_string())?;
    println!("Paths written to {}", out_path.display());

    Ok(())
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::LevelFilter::Warn
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            match record.level() {
                log::Level::Error => eprintln!("Error: {}", record.args()),
                log::Level::Warn => eprintln!("Warning: {}", record.args()),
                _ => eprintln!("{}", record.args()),
            }
        }
    }

    fn flush(&self) {}
}
