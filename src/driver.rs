pub mod config;

use crate::{
    driver::config::{Algorithm, Args, CliArgs, DemoSelection},
    handle::Handle,
    subsets,
};
use anyhow::{Result, ensure};
use clap::Parser as ClapParser;
use derive_more::Constructor;
use getset::Getters;

/// Inputs longer than this enumerate more than 2^20 subsets; refuse them up front.
const MAX_ELEMS: usize = 20;

pub fn driver_main() -> Result<()> {
    env_logger::init();

    let cli_args = CliArgs::parse();
    log::info!("{cli_args:?}");
    let args = Args::from(cli_args);

    ensure!(
        args.elems.len() <= MAX_ELEMS,
        "{} elements would enumerate 2^{} subsets; pass at most {MAX_ELEMS} elements",
        args.elems.len(),
        args.elems.len(),
    );

    if args.demos != DemoSelection::Subsets {
        demo_handles();
    }
    if args.demos != DemoSelection::Handles {
        demo_subsets(&args.elems, args.algorithm);
    }

    Ok(())
}

/// The demo resource. Member access goes through the handle's `Deref`.
#[derive(Constructor, Getters, Debug)]
#[getset(get = "pub")]
struct Sensor {
    id: u32,
    reading: i64,
}

/// Walks a handle group through construction, cloning, reassignment, scope exit,
/// and reset, printing the observable state at each step.
fn demo_handles() {
    println!("== shared-ownership handles ==");

    let first = Handle::new(Sensor::new(1, 10));
    let mut second = Handle::new(Sensor::new(2, 100));
    println!(
        "first: reading={}, count={}",
        first.reading(),
        first.use_count()
    );
    println!(
        "second: reading={}, count={}",
        second.reading(),
        second.use_count()
    );

    {
        let third = first.clone();
        println!();
        println!("cloned first into third: id={}, reading={}", third.id(), third.reading());
        print_counts(&[("first", &first), ("second", &second), ("third", &third)]);

        let fourth = third.clone();
        println!();
        println!("cloned third into fourth: reading={}", fourth.reading());
        print_counts(&[
            ("first", &first),
            ("second", &second),
            ("third", &third),
            ("fourth", &fourth),
        ]);

        second = fourth.clone();
        println!();
        println!("reassigned fourth into second: reading={}", second.reading());
        print_counts(&[
            ("first", &first),
            ("second", &second),
            ("third", &third),
            ("fourth", &fourth),
        ]);
    } // third and fourth go out of scope, decrementing the group's count.

    println!();
    println!("after inner scope:");
    print_counts(&[("first", &first), ("second", &second)]);

    second.reset(None);
    println!();
    println!(
        "after second.reset(None): second is_null={}, second count={}, first count={}",
        second.is_null(),
        second.use_count(),
        first.use_count(),
    );
}

fn print_counts(handles: &[(&str, &Handle<Sensor>)]) {
    for (name, handle) in handles {
        println!("  {name} count={}", handle.use_count());
    }
}

/// Enumerates the subsets of `elems` with the selected algorithm and prints each
/// one in braces form, e.g. `{1,2,}`.
fn demo_subsets(elems: &[i64], algorithm: Algorithm) {
    println!("== subset enumeration ({algorithm:?}) ==");

    let subsets = match algorithm {
        Algorithm::Recursive => subsets::subsets_recursive(elems),
        Algorithm::Stack => subsets::subsets_stack(elems),
        Algorithm::Doubling => subsets::subsets_doubling(elems),
    };
    log::info!("{} subsets of {} elements", subsets.len(), elems.len());

    for subset in &subsets {
        print!("{{");
        for elem in subset {
            print!("{elem},");
        }
        println!("}}");
    }
}
