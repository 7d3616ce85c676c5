//! Instruction script generator for tiered-ledger
//!
//! Writes a reproducible script to stdout, preceded by its instruction count.
//! Uses a simple LCG (Linear Congruential Generator) for reproducible randomness.
//!
//! Usage:
//!   cargo run --example script_generator -- [OPTIONS]
//!   cargo run --example script_generator -- -n 10000 | cargo run -- --summary out.csv
//!
//! Options:
//!   -n, --instructions <N>  Number of instructions (default: 10000)
//!   -a, --accounts <N>      Number of distinct account names (default: 100)
//!   -e, --error-rate <N>    Percentage of rejected or malformed lines 0-100 (default: 0)
//!   -s, --seed <N>          Random seed (default: 42)

use clap::Parser;
use std::io::{self, BufWriter, Write};

/// LCG with the Numerical Recipes / Knuth MMIX constants
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_u32(&mut self) -> u32 {
        (self.next() >> 32) as u32
    }

    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    fn next_bool(&mut self, probability_percent: u32) -> bool {
        self.next_range(100) < probability_percent
    }
}

const KINDS: [&str; 3] = ["Savings", "Checking", "Business"];

/// What the generator believes about each created account, so most lines succeed.
struct AccountModel {
    name: String,
    balance_millis: u64,
    active: bool,
}

#[derive(Parser, Debug)]
#[command(name = "script_generator")]
struct Args {
    #[arg(short = 'n', long, default_value_t = 10_000)]
    instructions: u32,

    #[arg(short = 'a', long, default_value_t = 100)]
    accounts: u32,

    #[arg(
        short = 'e',
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    error_rate: u32,

    #[arg(short = 's', long, default_value_t = 42)]
    seed: u64,
}

fn generate_faulty_line(rng: &mut Lcg, accounts: &[AccountModel]) -> String {
    let name = accounts
        .get(rng.next_range(accounts.len() as u32) as usize)
        .map(|a| a.name.as_str())
        .unwrap_or("acct0");
    match rng.next_range(8) {
        0 => format!("Close {}", name),                 // Invalid operation
        1 => format!("Create Credit {} 10.000", name), // Invalid account type
        2 => match accounts.first() {
            Some(existing) => format!("Create Savings {} 1.000", existing.name), // Duplicate
            None => "Deposit ghost 1.000".to_string(),                           // Unknown account
        },
        3 => "Withdraw ghost 1.000".to_string(),       // Unknown account
        4 => format!("Deposit {} -5.000", name),       // Negative amount
        5 => format!("Deposit {}", name),              // Missing amount
        6 => format!("Withdraw {} abc", name),         // Non-numeric amount
        _ => format!("Withdraw {} 99999999.000", name), // Insufficient funds
    }
}

fn format_millis(millis: u64) -> String {
    format!("{}.{:03}", millis / 1000, millis % 1000)
}

fn generate_amount_millis(rng: &mut Lcg) -> u64 {
    // Between 0.001 and 99999.999
    u64::from(rng.next_range(100_000_000)).max(1)
}

fn main() -> Result<(), String> {
    let config = Args::parse();

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let mut rng = Lcg::new(config.seed);
    let mut accounts: Vec<AccountModel> = Vec::new();
    let max_accounts = config.accounts.max(1);

    writeln!(writer, "{}", config.instructions).map_err(|e| e.to_string())?;

    for _ in 0..config.instructions {
        if rng.next_bool(config.error_rate) {
            let line = generate_faulty_line(&mut rng, &accounts);
            writeln!(writer, "{}", line).map_err(|e| e.to_string())?;
            continue;
        }

        let want_new = (accounts.len() as u32) < max_accounts
            && (accounts.is_empty() || rng.next_range(100) < 15);
        let line = if want_new {
            let name = format!("acct{}", accounts.len());
            let kind = KINDS[rng.next_range(KINDS.len() as u32) as usize];
            let balance = generate_amount_millis(&mut rng);
            let line = format!("Create {} {} {}", kind, name, format_millis(balance));
            accounts.push(AccountModel {
                name,
                balance_millis: balance,
                active: true,
            });
            line
        } else {
            let idx = rng.next_range(accounts.len() as u32) as usize;
            let roll = rng.next_range(100);
            if roll < 35 {
                let amount = generate_amount_millis(&mut rng);
                let account = &mut accounts[idx];
                account.balance_millis += amount;
                format!("Deposit {} {}", account.name, format_millis(amount))
            } else if roll < 60 && accounts[idx].active {
                // Withdraw up to the current balance
                let account = &mut accounts[idx];
                let amount = u64::from(rng.next_range(
                    u32::try_from(account.balance_millis + 1).unwrap_or(u32::MAX),
                ));
                account.balance_millis -= amount;
                format!("Withdraw {} {}", account.name, format_millis(amount))
            } else if roll < 85 && accounts[idx].active && accounts.len() > 1 {
                let to = (idx + 1 + rng.next_range(accounts.len() as u32 - 1) as usize)
                    % accounts.len();
                let amount = accounts[idx].balance_millis / 2;
                // Credited at 97%, never above the real net for any kind
                accounts[idx].balance_millis -= amount;
                accounts[to].balance_millis += amount * 97 / 100;
                format!(
                    "Transfer {} {} {}",
                    accounts[idx].name,
                    accounts[to].name,
                    format_millis(amount)
                )
            } else if roll < 93 {
                let account = &mut accounts[idx];
                account.active = !account.active;
                let verb = if account.active { "Activate" } else { "Deactivate" };
                format!("{} {}", verb, account.name)
            } else {
                format!("View {}", accounts[idx].name)
            }
        };

        writeln!(writer, "{}", line).map_err(|e| e.to_string())?;
    }

    writer.flush().map_err(|e| e.to_string())?;
    Ok(())
}
