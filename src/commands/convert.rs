use mileconv::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ArgEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Convert a single distance and print the result
#[derive(clap::Parser)]
#[clap(allow_negative_numbers = true)]
pub struct Opts {
    /// Output format
    #[clap(
        short,
        long,
        arg_enum,
        env = "MILECONV_FORMAT",
        default_value = "table"
    )]
    format: OutputFormat,
    /// Distance in miles, e.g. `1,234.5`
    miles: String,
}

pub fn execute(opts: Opts) -> Result<(), super::Error> {
    let report = Report::from_input(&opts.miles)?;
    tracing::info!(miles = report.miles(), "converted distance");

    match opts.format {
        OutputFormat::Table => {
            print!("{}", report.render_table());
            println!();
            println!("{}", report.status());
        }
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
