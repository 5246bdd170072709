// This file is part of Nitrogen.
//
// Nitrogen is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Nitrogen is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Nitrogen.  If not, see <http://www.gnu.org/licenses/>.
use anyhow::{Context, Result};
use linear_measure::{conversion_factor, rust_decimal::Decimal, Length, LengthUnit};
use log::{debug, trace};
use std::str::FromStr;
use structopt::StructOpt;

/// Convert lengths between the units of NIST Handbook 44, exactly.
#[derive(Debug, StructOpt)]
#[structopt(name = "length", about = "Exact conversion between units of length.")]
struct Opt {
    /// Print the conversion factor between every pair of units.
    #[structopt(long)]
    table: bool,

    /// Units to express the total in; every unit if omitted.
    #[structopt(short, long)]
    to: Vec<LengthUnit>,

    /// Lengths to add together, e.g. `1ft 6in` or `1 ft 6 in`. The total is
    /// kept in the unit of the first length.
    lengths: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    trace!("{:?}", opt);

    if opt.table {
        print_table()?;
    }
    if opt.lengths.is_empty() {
        return Ok(());
    }

    let total = sum_lengths(&group_tokens(&opt.lengths))?;
    println!("{}", total);
    let targets = if opt.to.is_empty() {
        LengthUnit::ALL.to_vec()
    } else {
        opt.to
    };
    for unit in targets {
        let converted = total
            .to_unit(unit)
            .with_context(|| format!("expressing {} in {}", total, unit.unit_name()))?;
        println!("  = {}", converted);
    }

    Ok(())
}

// Re-attach a bare number to the unit that follows it on the command line.
fn group_tokens(args: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut iter = args.iter().peekable();
    while let Some(arg) = iter.next() {
        if Decimal::from_str(arg.trim()).is_ok() {
            if let Some(unit) = iter.next_if(|next| LengthUnit::from_str(next).is_ok()) {
                out.push(format!("{} {}", arg, unit));
                continue;
            }
        }
        out.push(arg.to_owned());
    }
    out
}

fn sum_lengths(inputs: &[String]) -> Result<Length> {
    let mut total: Option<Length> = None;
    for input in inputs {
        let length = input
            .parse::<Length>()
            .with_context(|| format!("parsing length {:?}", input))?;
        total = Some(match total {
            Some(acc) => {
                let sum = acc.checked_add(&length)?;
                debug!("{} + {} = {}", acc, length, sum);
                sum
            }
            None => length,
        });
    }
    total.context("no lengths given")
}

fn print_table() -> Result<()> {
    print!("{:>4}", "");
    for to in LengthUnit::ALL {
        print!("{:>13}", to.abbreviation());
    }
    println!();
    for from in LengthUnit::ALL {
        print!("{:>4}", from.abbreviation());
        for to in LengthUnit::ALL {
            print!("{:>13}", conversion_factor(from, to)?.to_string());
        }
        println!();
    }
    Ok(())
}
