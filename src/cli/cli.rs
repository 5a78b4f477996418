use std::time::Duration;

use clap::{Args, Parser};
use indicatif::{ProgressBar, ProgressStyle};

mod enumerate;
use enumerate::enumerate;

fn unknown_bar_with_pos() -> ProgressBar {
    let template = "[{elapsed_precise}] [{spinner:10.cyan/blue}] {pos} {msg}";

    let style = ProgressStyle::with_template(template)
        .unwrap()
        .tick_strings(&[
            ">---------",
            "=>--------",
            "<=>-------",
            "-<=>------",
            "--<=>-----",
            "---<=>----",
            "----<=>---",
            "-----<=>--",
            "------<=>-",
            "-------<=>",
            "--------<=",
            "---------<",
            "--------<=",
            "-------<=>",
            "------<=>-",
            "-----<=>--",
            "---<=>----",
            "--<=>-----",
            "-<=>------",
            "<=>-------",
            "=>--------",
        ]);

    let bar = ProgressBar::new(100).with_style(style);

    bar.enable_steady_tick(Duration::from_millis(66));

    bar
}

#[derive(Clone, Parser)]
pub enum Opts {
    /// Enumerate free polyominoes with a specific number of cells
    Enumerate(EnumerateOpts),
}

#[derive(Clone, Args)]
pub struct EnumerateOpts {
    /// The N value for which to enumerate all free polyominoes.
    pub n: usize,

    /// Print each shape as a `#`-grid.
    #[clap(long, short = 's')]
    pub show: bool,

    /// Print a tally of shapes per symmetry class.
    #[clap(long, short = 'c')]
    pub census: bool,
}

fn main() {
    let opts = Opts::parse();

    match opts {
        Opts::Enumerate(opts) => enumerate(&opts),
    }
}
