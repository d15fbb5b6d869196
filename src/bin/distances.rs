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

use likewise::distance::jaccard;
use likewise::io;

fn main() {

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("i", "inputfile", "Input file name (required). The input consists of interactions \
        between users and items. The input file must be a CSV file with a header line that names \
        the user and item columns.", "PATH");
    opts.optopt("o", "modelfile", "Output file name (required). The computed similarity model is \
        written to this file in JSON format, ready to be queried with the recommend tool.", "PATH");
    opts.optopt("u", "user-column", "Name of the column that holds the user identifiers \
        (optional, defaults to 'user').", "NAME");
    opts.optopt("c", "item-column", "Name of the column that holds the item identifiers \
        (optional, defaults to 'artist').", "NAME");
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

    if !matches.opt_present("i") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify an inputfile via --inputfile."),
        );
    }

    if !matches.opt_present("o") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a modelfile via --modelfile."),
        );
    }

    let interactions_path = matches.opt_str("i").unwrap();
    let model_path = matches.opt_str("o").unwrap();

    let user_column = matches.opt_str("u").unwrap_or_else(|| String::from("user"));
    let item_column = matches.opt_str("c").unwrap_or_else(|| String::from("artist"));

    if let Err(failure) = build_model(&interactions_path, &model_path, &user_column, &item_column) {
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

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
}

fn build_model(
    interactions_path: &str,
    model_path: &str,
    user_column: &str,
    item_column: &str,
) -> Result<(), Box<dyn Error>> {

    println!("Reading interactions from {}", interactions_path);

    let mut reader = io::csv_reader(interactions_path)?;
    let interactions = io::interactions_from_csv(&mut reader, user_column, item_column)?;

    println!("Computing the item distance matrix...");

    let model = likewise::distance_data(&interactions, num_cpus::get(), jaccard)?;

    println!(
        "Found {} interactions between {} users and {} items.",
        interactions.len(),
        model.num_users(),
        model.num_items(),
    );

    println!("Writing the similarity model to {}", model_path);
    io::write_model(&model, model_path)?;

    Ok(())
}
