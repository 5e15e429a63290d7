//! Line-oriented prompts with validation loops.
//!
//! Every prompt repeats until it gets a valid answer. A closed input stream
//! ends the session with [`io::ErrorKind::UnexpectedEof`].

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use stockviz_core::{ChartKind, ChartRequest};
use stockviz_market_data::{Resolution, DATE_FORMAT};

use crate::args::{parse_date, Args};

pub const RULE: &str = "============================================================";

const CHART_TYPES: [(&str, ChartKind); 2] = [("1", ChartKind::Line), ("2", ChartKind::Bar)];

const TIME_SERIES: [(&str, Resolution); 4] = [
    ("1", Resolution::Intraday),
    ("2", Resolution::Daily),
    ("3", Resolution::Weekly),
    ("4", Resolution::Monthly),
];

/// Everything needed for one chart, after validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selections {
    pub symbol: String,
    pub chart_type: ChartKind,
    pub time_series: Resolution,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub interval: Option<String>,
}

impl Selections {
    pub fn to_request(&self) -> ChartRequest {
        ChartRequest {
            symbol: self.symbol.clone(),
            time_series: self.time_series.as_str().to_string(),
            start_date: self.start_date.format(DATE_FORMAT).to_string(),
            end_date: self.end_date.format(DATE_FORMAT).to_string(),
            chart_type: self.chart_type.as_str().to_string(),
            interval: self.interval.clone(),
        }
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "           STOCK DATA VISUALIZER")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(
            self.output,
            "\nCharts Alpha Vantage prices for a symbol and date range.\n"
        )
    }

    pub fn symbol(&mut self) -> io::Result<String> {
        loop {
            let symbol = self.ask("\nEnter the stock symbol: ")?;
            if !symbol.is_empty() {
                return Ok(symbol.to_uppercase());
            }
            writeln!(
                self.output,
                "Error: Stock symbol cannot be empty. Please try again."
            )?;
        }
    }

    pub fn chart_type(&mut self) -> io::Result<ChartKind> {
        writeln!(self.output, "\nChart Types:")?;
        writeln!(self.output, "1. Line")?;
        writeln!(self.output, "2. Bar")?;
        loop {
            let choice = self.ask("\nEnter the chart type (1, 2): ")?;
            if let Some((_, kind)) = CHART_TYPES.iter().find(|(key, _)| *key == choice) {
                return Ok(*kind);
            }
            writeln!(self.output, "Error: Invalid choice. Please enter 1 or 2.")?;
        }
    }

    pub fn time_series(&mut self) -> io::Result<Resolution> {
        writeln!(self.output, "\nTime Series Functions:")?;
        for (key, resolution) in TIME_SERIES {
            writeln!(self.output, "{}. {}", key, resolution.title())?;
        }
        loop {
            let choice = self.ask("\nEnter the time series function (1, 2, 3, 4): ")?;
            if let Some((_, resolution)) = TIME_SERIES.iter().find(|(key, _)| *key == choice) {
                return Ok(*resolution);
            }
            writeln!(
                self.output,
                "Error: Invalid choice. Please enter 1, 2, 3, or 4."
            )?;
        }
    }

    pub fn date(&mut self, label: &str) -> io::Result<NaiveDate> {
        loop {
            let answer = self.ask(&format!("\n{} (YYYY-MM-DD): ", label))?;
            match parse_date(&answer) {
                Ok(date) => return Ok(date),
                Err(_) => writeln!(
                    self.output,
                    "Error: Invalid date format. Please use YYYY-MM-DD format (e.g., 2024-01-15)."
                )?,
            }
        }
    }

    /// Asks for the end date until it is not before `start`.
    pub fn end_date(&mut self, start: NaiveDate) -> io::Result<NaiveDate> {
        loop {
            let end = self.date("Enter the end date")?;
            if end >= start {
                return Ok(end);
            }
            writeln!(
                self.output,
                "Error: End date ({}) cannot be before start date ({}).",
                end, start
            )?;
            writeln!(self.output, "Please enter a valid end date.")?;
        }
    }

    /// Fills in whatever `preset` leaves out.
    pub fn collect(&mut self, preset: Args) -> io::Result<Selections> {
        let symbol = match preset.symbol.filter(|s| !s.trim().is_empty()) {
            Some(s) => s.trim().to_uppercase(),
            None => self.symbol()?,
        };
        let chart_type = match preset.chart_type {
            Some(s) => ChartKind::parse_lenient(&s),
            None => self.chart_type()?,
        };
        let time_series = match preset.time_series {
            Some(s) => Resolution::parse_lenient(&s),
            None => self.time_series()?,
        };
        let start_date = match preset.start_date {
            Some(d) => d,
            None => self.date("Enter the start date")?,
        };
        // A flag-supplied inverted window is left for the pipeline to reject.
        let end_date = match preset.end_date {
            Some(d) => d,
            None => self.end_date(start_date)?,
        };

        Ok(Selections {
            symbol,
            chart_type,
            time_series,
            start_date,
            end_date,
            interval: preset.interval,
        })
    }

    pub fn summary(&mut self, selections: &Selections) -> io::Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "SUMMARY OF YOUR SELECTIONS")?;
        writeln!(self.output, "{}", RULE)?;
        writeln!(self.output, "Stock Symbol:      {}", selections.symbol)?;
        writeln!(
            self.output,
            "Chart Type:        {}",
            capitalize(selections.chart_type.as_str())
        )?;
        writeln!(
            self.output,
            "Time Series:       {}",
            selections.time_series.title()
        )?;
        writeln!(self.output, "Start Date:        {}", selections.start_date)?;
        writeln!(self.output, "End Date:          {}", selections.end_date)?;
        writeln!(self.output, "{}", RULE)
    }

    /// `y` or an empty line continues; end of input stops.
    pub fn another(&mut self) -> io::Result<bool> {
        loop {
            let answer = match self.ask("\nWould you like to view another stock? (y/n): ") {
                Ok(answer) => answer.to_lowercase(),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(false),
                Err(e) => return Err(e),
            };
            match answer.as_str() {
                "y" | "" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "Please enter 'y' to continue or 'n' to exit.")?,
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
