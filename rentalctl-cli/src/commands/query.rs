//! Query subcommands - one per catalog operation

use std::io::Write;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rentalctl_catalog::models::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};
use rentalctl_catalog::{Catalog, CategoryId, CategorySelector, MatchMode};
use tracing::info;

use crate::render::{render, OutputFormat};

#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// List films in a category (by id or name), ordered by title and language
    FilmsInCategory(FilmsInCategoryArgs),
    /// Count films in a category by id
    CountInCategory {
        /// Category id (integer)
        #[arg(value_name = "ID")]
        category_id: CategoryId,
    },
    /// Count films per length within an inclusive length range
    CountByLength {
        /// Minimum film length
        #[arg(long, default_value_t = DEFAULT_MIN_LENGTH, allow_negative_numbers = true)]
        min: f64,
        /// Maximum film length
        #[arg(long, default_value_t = DEFAULT_MAX_LENGTH, allow_negative_numbers = true)]
        max: f64,
    },
    /// List customers living in a city (exact name)
    ClientsFromCity {
        /// City name
        city: String,
    },
    /// Average rental payment for films of an exact length
    AvgAmountByLength {
        /// Film length
        #[arg(allow_negative_numbers = true)]
        length: f64,
    },
    /// Customers whose rented film lengths add up to more than a threshold
    ClientsBySumLength {
        /// Threshold the summed length must exceed (not negative)
        #[arg(value_name = "MIN_SUM", allow_negative_numbers = true)]
        min_sum: f64,
    },
    /// Length statistics (avg/sum/min/max) for a category name
    CategoryStats {
        /// Category name (exact)
        name: String,
    },
    /// List the cast of a film (exact title)
    FilmCast {
        /// Film title
        title: String,
    },
    /// Titles containing any of the given words as a whole word (case-insensitive)
    TitlesMatching {
        /// Words to look for
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,
    },
}

#[derive(Parser, Debug)]
pub struct FilmsInCategoryArgs {
    /// Category id (integer) or name
    pub category: CategorySelector,

    /// Match the category name ignoring case
    #[arg(long, short = 'i')]
    pub ignore_case: bool,
}

impl QueryCommand {
    pub fn name(&self) -> &'static str {
        match self {
            QueryCommand::FilmsInCategory(_) => "films-in-category",
            QueryCommand::CountInCategory { .. } => "count-in-category",
            QueryCommand::CountByLength { .. } => "count-by-length",
            QueryCommand::ClientsFromCity { .. } => "clients-from-city",
            QueryCommand::AvgAmountByLength { .. } => "avg-amount-by-length",
            QueryCommand::ClientsBySumLength { .. } => "clients-by-sum-length",
            QueryCommand::CategoryStats { .. } => "category-stats",
            QueryCommand::FilmCast { .. } => "film-cast",
            QueryCommand::TitlesMatching { .. } => "titles-matching",
        }
    }
}

/// Run one query and render its result to `out`.
pub async fn run_query<W: Write>(
    command: QueryCommand,
    catalog: &Catalog<'_>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let name = command.name();
    info!(command = name, "running query");

    match command {
        QueryCommand::FilmsInCategory(args) => {
            let mode = if args.ignore_case {
                MatchMode::CaseInsensitive
            } else {
                MatchMode::Exact
            };
            let table = catalog
                .films_in_category(args.category, mode)
                .await
                .with_context(|| format!("{} failed", name))?;
            render(&table, format, out)
        }
        QueryCommand::CountInCategory { category_id } => {
            let table = catalog
                .categories()
                .film_count(category_id)
                .await
                .with_context(|| format!("{} failed", name))?;
            render(&table, format, out)
        }
        QueryCommand::CountByLength { min, max } => {
            let table = catalog
                .number_film_by_length(min, max)
                .await
                .with_context(|| format!("{} failed", name))?;
            render(&table, format, out)
        }
        QueryCommand::ClientsFromCity { city } => {
            let table = catalog
                .client_from_city(&city)
                .await
                .with_context(|| format!("{} failed", name))?;
            render(&table, format, out)
        }
        QueryCommand::AvgAmountByLength { length } => {
            let table = catalog
                .avg_amount_by_length(length)
                .await
                .with_context(|| format!("{} failed", name))?;
            render(&table, format, out)
        }
        QueryCommand::ClientsBySumLength { min_sum } => {
            let table = catalog
                .client_by_sum_length(min_sum)
                .await
                .with_context(|| format!("{} failed", name))?;
            render(&table, format, out)
        }
        QueryCommand::CategoryStats { name: category } => {
            let table = catalog
                .category_statistic_length(&category)
                .await
                .with_context(|| format!("{} failed", name))?;
            render(&table, format, out)
        }
        QueryCommand::FilmCast { title } => {
            let table = catalog
                .film_cast(&title)
                .await
                .with_context(|| format!("{} failed", name))?;
            render(&table, format, out)
        }
        QueryCommand::TitlesMatching { words } => {
            let table = catalog
                .film_title_case_insensitive(&words)
                .await
                .with_context(|| format!("{} failed", name))?;
            render(&table, format, out)
        }
    }
}
