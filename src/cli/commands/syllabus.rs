//! `curriculum syllabus` command - Inspect a syllabus document

use clap::Subcommand;
use console::style;
use miette::Result;
use std::path::{Path, PathBuf};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{load_failure, render_serialized, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::loader::load_document;
use crate::entities::{DayOverview, Syllabus};

#[derive(Subcommand, Debug)]
pub enum SyllabusCommands {
    /// Table of weeks and days with totals
    Summary(SummaryArgs),

    /// Show a single day by its curriculum-wide number
    Day(DayArgs),
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Syllabus file
    pub file: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct DayArgs {
    /// Syllabus file
    pub file: PathBuf,

    /// Global day number (1-30)
    pub number: u8,
}

pub fn run(cmd: SyllabusCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        SyllabusCommands::Summary(args) => run_summary(args, global),
        SyllabusCommands::Day(args) => run_day(args, global),
    }
}

fn load(file: &Path) -> Result<Syllabus> {
    load_document::<Syllabus>(file).map_err(load_failure)
}

fn run_summary(args: SummaryArgs, global: &GlobalOpts) -> Result<()> {
    let syllabus = load(&args.file)?;

    if global.format != OutputFormat::Auto {
        println!("{}", render_serialized(&syllabus, global.format)?);
        return Ok(());
    }

    let meta = syllabus.metadata();
    if !global.quiet {
        println!(
            "{} {}",
            style(format!("{} syllabus", meta.target_exam())).bold(),
            style(format!("v{} ({})", meta.version(), meta.language())).dim()
        );
        println!();
    }

    println!("{}", summary_table(&syllabus));

    if !global.quiet {
        let total_hours: u32 = syllabus.weeks().iter().map(|w| w.total_hours()).sum();
        println!();
        println!("  Weeks:          {}", style(syllabus.weeks().len()).cyan());
        println!(
            "  Days listed:    {} of {}",
            style(syllabus.get_total_days()).cyan(),
            meta.total_days()
        );
        println!("  Study hours:    {}", style(total_hours).cyan());
    }

    Ok(())
}

fn summary_table(syllabus: &Syllabus) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Week", "Day", "#", "Topic", "Difficulty", "Hours", "Services"]);

    for week in syllabus.weeks() {
        for day in week.days() {
            builder.push_record([
                week.week_number().to_string(),
                day.day_number().to_string(),
                day.global_day_number().to_string(),
                truncate_str(day.topic(), 40),
                day.difficulty().to_string(),
                day.estimated_hours().to_string(),
                truncate_str(&day.aws_services().join(", "), 40),
            ]);
        }
    }

    builder.build().with(Style::markdown()).to_string()
}

fn run_day(args: DayArgs, global: &GlobalOpts) -> Result<()> {
    let syllabus = load(&args.file)?;

    let Some(day) = syllabus.get_day_by_global_number(args.number) else {
        println!(
            "{} Day {} not found in {}",
            style("!").yellow(),
            args.number,
            args.file.display()
        );
        return Ok(());
    };

    match global.format {
        OutputFormat::Auto => print_day(&syllabus, day),
        format => println!("{}", render_serialized(day, format)?),
    }

    Ok(())
}

fn print_day(syllabus: &Syllabus, day: &DayOverview) {
    let week = syllabus
        .weeks()
        .iter()
        .find(|w| w.days().iter().any(|d| std::ptr::eq(d, day)));

    println!(
        "{} {}",
        style(format!("Day {}", day.global_day_number())).bold(),
        day.topic()
    );
    if let Some(week) = week {
        println!(
            "  {}: {} (day {})",
            style("Week").cyan(),
            week.week_number(),
            day.day_number()
        );
        if !week.theme().is_empty() {
            println!("  {}: {}", style("Theme").cyan(), week.theme());
        }
    }
    println!("  {}: {}", style("Difficulty").cyan(), day.difficulty());
    println!("  {}: {}", style("Hours").cyan(), day.estimated_hours());
    if !day.aws_services().is_empty() {
        println!(
            "  {}: {}",
            style("Services").cyan(),
            day.aws_services().join(", ")
        );
    }
}
