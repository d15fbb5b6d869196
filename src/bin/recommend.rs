/**
 * Likewise
 * Copyright (C) 2018 Sebastian Schelter
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::env;
use std::error::Error;

use getopts::Options;

use likewise::io;
use likewise::recommend::recommend;

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("m", "modelfile", "File that holds a similarity model computed by the distances \
        tool (optional, defaults to 'distances.json').", "PATH");
    opts.optflag("l", "list-items", "Print all items known to the model and exit.");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    let model_path = matches.opt_str("m").unwrap_or_else(|| String::from("distances.json"));

    if matches.opt_present("l") {
        if let Err(failure) = list_items(&model_path) {
            let hint = failure.to_string();
            print_usage_and_exit(&program, opts, Some(&hint));
        }
        return;
    }

    if matches.free.len() < 2 {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify the number of recommendations and at least one seed item."),
        );
    }

    let how_many: usize = match matches.free[0].parse() {
        Ok(how_many) => how_many,
        Err(_) => {
            let hint = format!("'{}' is not a valid number of recommendations.", matches.free[0]);
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    let seed_items: Vec<String> = matches.free[1..].to_vec();

    // Any failure in the core becomes a usage message with a hint
    if let Err(failure) = print_recommendations(&model_path, &seed_items, how_many) {
        let hint = failure.to_string();
        print_usage_and_exit(&program, opts, Some(&hint));
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options] <num-recommendations> <seed-item>...", program);
    eprint!("{}", opts.usage(&brief));
}

fn print_recommendations(
    model_path: &str,
    seed_items: &[String],
    how_many: usize,
) -> Result<(), Box<dyn Error>> {

    let model = io::read_model(model_path)?;

    let recommendations = recommend(&model, seed_items, how_many)?;

    for (rank, item) in recommendations.iter().enumerate() {
        println!("{}. {}", rank + 1, item);
    }

    Ok(())
}

fn list_items(model_path: &str) -> Result<(), Box<dyn Error>> {

    let model = io::read_model(model_path)?;

    for item in model.items() {
        println!("{}", item);
    }

    Ok(())
}
