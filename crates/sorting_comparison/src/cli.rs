use anyhow::{Result, bail};
use clap::{ArgAction, Parser};
use counted_sort::{SortAlgorithm, all_algorithms};

pub const DEFAULT_ARRAY_LENGTH: usize = 100;
pub const DEFAULT_MAX_TO_PRINT: usize = 100;
pub const DEFAULT_RANDOM_SEED: u64 = 1000;

#[derive(Debug, Parser)]
#[command(
    name = "sorting_comparison",
    about = "Compares sorting algorithms against each other. Uses a random seed to generate elements to sort."
)]
pub struct Cli {
    /// Enables all sorts.
    #[arg(short = 'a', long)]
    pub all: bool,
    /// Enables bubble sort.
    #[arg(short = 'b', long)]
    pub bubble: bool,
    /// Enables shell sort (Ciura gap sequence).
    #[arg(short = 's', long)]
    pub shell_ciura: bool,
    /// Enables shell sort (Pratt gap sequence).
    #[arg(short = 'S', long)]
    pub shell_pratt: bool,
    /// Enables quicksort (recursive).
    #[arg(short = 'q', long)]
    pub quick_recursive: bool,
    /// Enables quicksort (stack).
    #[arg(short = 't', long)]
    pub quick_stack: bool,
    /// Enables quicksort (queue).
    #[arg(short = 'Q', long)]
    pub quick_queue: bool,
    /// Number of array elements to generate.
    #[arg(short = 'n', long, value_name = "LENGTH", default_value_t = DEFAULT_ARRAY_LENGTH)]
    pub length: usize,
    /// Number of total elements to print.
    #[arg(short = 'p', long, value_name = "ELEMENTS", default_value_t = DEFAULT_MAX_TO_PRINT)]
    pub print: usize,
    /// Random seed used to generate array elements.
    #[arg(short = 'r', long, value_name = "SEED", default_value_t = DEFAULT_RANDOM_SEED)]
    pub seed: u64,
    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    fn selects(&self, algo: SortAlgorithm) -> bool {
        self.all
            || match algo {
                SortAlgorithm::BubbleSort => self.bubble,
                SortAlgorithm::ShellSortCiura => self.shell_ciura,
                SortAlgorithm::ShellSortPratt => self.shell_pratt,
                SortAlgorithm::QuickSortRecursive => self.quick_recursive,
                SortAlgorithm::QuickSortStack => self.quick_stack,
                SortAlgorithm::QuickSortQueue => self.quick_queue,
            }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunConfig {
    /// In report order, regardless of flag order.
    pub algorithms: Vec<SortAlgorithm>,
    pub length: usize,
    pub max_to_print: usize,
    pub seed: u64,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let algorithms = all_algorithms()
            .iter()
            .copied()
            .filter(|&algo| cli.selects(algo))
            .collect::<Vec<_>>();

        if algorithms.is_empty() {
            bail!("Select at least one sort to perform.");
        }
        if cli.length == 0 {
            bail!("Invalid array length.");
        }

        Ok(Self {
            algorithms,
            length: cli.length,
            max_to_print: cli.print.min(cli.length),
            seed: cli.seed,
        })
    }
}
