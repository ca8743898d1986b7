//! seedcrack - PRNG seed recovery utility
//!
//! Usage: seedcrack <mode> [options]
//!
//! Modes:
//!   generate <chain_num> <chain_len> <table_count> <hash_name>
//!   search   <table_file> <target_hash_hex>
//!   crack    <hash_name> <target_hash_hex>
//!   prob     <chain_num> <chain_len> <table_count> [keyspace]
//!
//! Example: seedcrack generate 1000000 1000 3 wikihash

use std::env;
use std::path::Path;
use std::time::Instant;

use log::info;
use seedcrack_rainbow::app::exhaustive::crack;
use seedcrack_rainbow::app::generator::generate_tables;
use seedcrack_rainbow::app::lookup::search_table_file;
use seedcrack_rainbow::constants::SEED_SPACE;
use seedcrack_rainbow::domain::probability::success_probability;
use seedcrack_rainbow::HashRegistry;

fn print_usage() {
    eprintln!("seedcrack: hash cracking utility.");
    eprintln!("Usage: seedcrack [mode] [options]");
    eprintln!("Modes:");
    eprintln!("\t generate <chain num> <chain len> <table count> <hash function>");
    eprintln!("\t search <rainbow table> <target hash>");
    eprintln!("\t crack <hash function> <target hash>");
    eprintln!("\t prob <chain num> <chain len> <table count> [keyspace]");
    eprintln!();
}

fn invalid_args() -> ! {
    print_usage();
    eprintln!("[-] Invalid arguments");
    std::process::exit(1);
}

fn parse_u32(arg: &str) -> u32 {
    match arg.parse() {
        Ok(v) => v,
        Err(_) => {
            eprintln!("Error: invalid number '{}'", arg);
            invalid_args();
        }
    }
}

fn parse_hex(arg: &str) -> Vec<u8> {
    match hex::decode(arg) {
        Ok(bytes) => bytes,
        Err(_) => {
            eprintln!("Error: invalid hex string '{}'", arg);
            invalid_args();
        }
    }
}

fn report(outcome: seedcrack_rainbow::Result<Option<u32>>) {
    match outcome {
        Ok(Some(seed)) => println!("[+] Seed found: {}", seed),
        Ok(None) => println!("[-] Seed not found :-("),
        Err(e) => eprintln!("[-] An error occurred: {}", e),
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let registry = HashRegistry::builtin();

    match args[1].as_str() {
        "generate" => {
            if args.len() != 6 {
                invalid_args();
            }
            let chain_num = parse_u32(&args[2]);
            let chain_len = parse_u32(&args[3]);
            let table_count = parse_u32(&args[4]);

            let entry = match registry.resolve(&args[5]) {
                Ok(e) => e,
                Err(e) => {
                    eprintln!("[-] An error occurred: {}", e);
                    return;
                }
            };

            println!(
                "Generating {} table(s) of {} chains, length {}...",
                table_count, chain_num, chain_len
            );
            let start = Instant::now();
            match generate_tables(Path::new("."), chain_num, chain_len, table_count, entry) {
                Ok(paths) => {
                    for path in &paths {
                        println!("Wrote {}", path.display());
                    }
                    info!("generation took {:.2} seconds", start.elapsed().as_secs_f64());
                    println!("Done in {:.2} seconds.", start.elapsed().as_secs_f64());
                }
                Err(e) => eprintln!("[-] An error occurred: {}", e),
            }
        }
        "search" => {
            if args.len() != 4 {
                invalid_args();
            }
            let target = parse_hex(&args[3]);
            let start = Instant::now();
            let outcome = search_table_file(Path::new(&args[2]), &registry, &target);
            info!("search took {:.2} seconds", start.elapsed().as_secs_f64());
            report(outcome);
        }
        "crack" => {
            if args.len() != 4 {
                invalid_args();
            }
            let target = parse_hex(&args[3]);
            match registry.resolve(&args[2]) {
                Ok(entry) => {
                    let start = Instant::now();
                    let outcome = crack(entry, &target);
                    info!("crack took {:.2} seconds", start.elapsed().as_secs_f64());
                    report(outcome);
                }
                Err(e) => eprintln!("[-] An error occurred: {}", e),
            }
        }
        "prob" => {
            if args.len() != 5 && args.len() != 6 {
                invalid_args();
            }
            let chain_num = parse_u32(&args[2]) as u64;
            let chain_len = parse_u32(&args[3]);
            let table_count = parse_u32(&args[4]);
            let key_space = if args.len() == 6 {
                match args[5].parse() {
                    Ok(v) => v,
                    Err(_) => invalid_args(),
                }
            } else {
                SEED_SPACE
            };
            let p = success_probability(chain_num, chain_len, table_count, key_space);
            println!("Success probability is: {:.6}", p);
        }
        _ => {
            print_usage();
            eprintln!("[-] Invalid mode of operation.");
            std::process::exit(1);
        }
    }
}
