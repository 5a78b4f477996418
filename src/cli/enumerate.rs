use std::{collections::BTreeMap, time::Instant};

use openominoes::{free_polyominoes, D4Subgroup};

use crate::{unknown_bar_with_pos, EnumerateOpts};

pub fn enumerate(opts: &EnumerateOpts) {
    let n = opts.n;

    let start = Instant::now();

    let bar = unknown_bar_with_pos();
    bar.set_message(format!("Finding unique polyominoes of N = {n}..."));

    let mut census: BTreeMap<D4Subgroup, usize> = BTreeMap::new();
    let mut count = 0usize;

    for polyomino in free_polyominoes(n) {
        count += 1;
        bar.inc(1);

        if opts.census {
            *census.entry(polyomino.symmetry()).or_default() += 1;
        }

        if opts.show {
            bar.suspend(|| println!("{polyomino}\n"));
        }
    }

    let duration = start.elapsed();
    bar.finish_and_clear();

    if opts.census {
        println!("Symmetry census for N = {n}:");
        for (class, tally) in &census {
            println!("  {class}: {tally}");
        }
    }

    println!("Unique polyominoes found for N = {n}: {count}.");
    println!("Duration: {} ms", duration.as_millis());
}
