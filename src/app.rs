use std::io::{BufWriter, stdout};

use crate::{
    common::{
        config::{BatchPolicy, LedgerConfig, RangeEnd},
        error::AppError,
    },
    domain::{ledger::Ledger, statistics::DailySummary},
    io::{reader, writer},
};

/// Command line options after the program name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input_path: String,
    pub config: LedgerConfig,
    /// Restrict output to `start` and the following days.
    pub range: Option<(String, u64)>,
}

impl Options {
    pub fn parse<I, S>(args: I) -> Result<Options, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into).skip(1);
        let mut input_path = None;
        let mut config = LedgerConfig::default();
        let mut from = None;
        let mut days = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--best-effort" => config.batch_policy = BatchPolicy::BestEffort,
                "--inclusive-range" => config.range_end = RangeEnd::Inclusive,
                "--from" => {
                    from = Some(
                        args.next()
                            .ok_or_else(|| AppError::MissingOptionValue(arg.clone()))?,
                    )
                }
                "--days" => {
                    let value = args
                        .next()
                        .ok_or_else(|| AppError::MissingOptionValue(arg.clone()))?;
                    let n = value
                        .parse::<u64>()
                        .map_err(|e| AppError::Parse(format!("--days {value}: {e}")))?;
                    days = Some(n);
                }
                flag if flag.starts_with("--") => {
                    return Err(AppError::UnknownOption(flag.to_string()));
                }
                _ if input_path.is_none() => input_path = Some(arg),
                _ => return Err(AppError::UnknownOption(arg)),
            }
        }

        let range = match (from, days) {
            (Some(start), Some(n)) => Some((start, n)),
            (None, None) => None,
            (Some(_), None) => return Err(AppError::MissingOptionValue("--days".into())),
            (None, Some(_)) => return Err(AppError::MissingOptionValue("--from".into())),
        };

        Ok(Options {
            input_path: input_path.ok_or(AppError::MissingArg)?,
            config,
            range,
        })
    }
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let options = Options::parse(args)?;

    let file = std::fs::File::open(&options.input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);
    let records = reader::read_records(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::Parse)?;

    let mut ledger = Ledger::with_config(options.config);
    let report = ledger.process_batch(&records);
    for (index, reason) in &report.rejections {
        tracing::warn!("record {} not loaded: {reason}", index + 1);
    }

    let summaries = summarize(&mut ledger, options.range.as_ref())?;

    // After loading the batch, write the per-day summaries to stdout
    let stdout = stdout();
    let writer = BufWriter::new(stdout.lock());
    writer::write_summaries(writer, &summaries)?;

    Ok(())
}

/// Summaries for every stored date, or only the dates inside `range`.
pub fn summarize(
    ledger: &mut Ledger,
    range: Option<&(String, u64)>,
) -> Result<Vec<DailySummary>, AppError> {
    let dates = match range {
        Some((start, days)) => {
            let mut dates: Vec<String> = ledger
                .by_range(start, *days)?
                .into_iter()
                .map(|t| t.date)
                .collect();
            dates.sort();
            dates.dedup();
            dates
        }
        None => ledger.dates(),
    };

    Ok(dates.iter().map(|d| ledger.summary(d)).collect())
}
