use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use fieldstate::{
    DocumentFormat, FieldUI, FormDefinition, OutputDestination, OutputOptions, UiOptions,
    parse_form_definition,
};

const DEMO_FORM: &str = r#"{
  "title": "Trip Planner Signup",
  "fields": [
    { "id": "name", "label": "Full Name", "min_length": 1, "max_length": 60 },
    { "id": "phone", "label": "Phone Number", "kind": "phone", "max_length": 10,
      "helper": "10-digit mobile number starting with 6-9" },
    { "id": "referral", "label": "Referral Code", "kind": "regex",
      "pattern": "([A-Z]{3}[0-9]{3})?", "optional": true, "max_length": 6 }
  ]
}"#;

#[derive(Debug, Parser)]
#[command(
    name = "fieldstate",
    version,
    about = "Fill in a validated form in the terminal and emit the values"
)]
struct Cli {
    /// Form definition: file path, inline payload, or "-" for stdin. Defaults to a demo form.
    #[arg(long = "form", value_name = "SPEC")]
    form: Option<String>,

    /// Title shown above the fields (overrides the definition's title)
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Output destinations ("-" writes to stdout)
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact JSON/TOML rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Quit immediately even when the form has unsubmitted edits
    #[arg(long = "no-confirm-exit")]
    no_confirm_exit: bool,

    /// Write debug logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let output = build_output_options(&cli);
    output.ensure_available().map_err(|err| eyre!("{err:#}"))?;

    let definition = load_definition(cli.form.as_deref())?;
    log::info!("loaded form with {} field(s)", definition.fields.len());

    let mut ui = FieldUI::from_definition(&definition).map_err(|err| eyre!("{err:#}"))?;
    if let Some(title) = cli.title.as_ref() {
        ui = ui.with_title(title.clone());
    }
    ui = ui
        .with_options(UiOptions::default().with_confirm_exit(!cli.no_confirm_exit))
        .with_output(output);

    ui.run().map_err(|err| eyre!("{err:#}"))?;
    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let file =
        File::create(path).wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(LevelFilter::Debug, config, file).wrap_err("failed to install logger")?;
    Ok(())
}

fn load_definition(spec: Option<&str>) -> Result<FormDefinition> {
    let Some(spec) = spec else {
        return parse(DEMO_FORM, DocumentFormat::Json, "demo form");
    };
    if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read form from stdin")?;
        return parse(&buffer, DocumentFormat::Json, "form from stdin");
    }

    let path = Path::new(spec);
    match fs::read_to_string(path) {
        Ok(contents) => {
            let format = DocumentFormat::from_extension(path).unwrap_or_default();
            parse(&contents, format, &path.display().to_string())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            parse(spec, DocumentFormat::Json, "inline form")
        }
        Err(err) => Err(err).wrap_err_with(|| format!("failed to read form {}", path.display())),
    }
}

fn parse(contents: &str, format: DocumentFormat, label: &str) -> Result<FormDefinition> {
    parse_form_definition(contents, format).map_err(|err| eyre!("{label}: {err:#}"))
}

fn build_output_options(cli: &Cli) -> OutputOptions {
    let destinations: Vec<OutputDestination> = if cli.outputs.is_empty() {
        vec![OutputDestination::Stdout]
    } else {
        cli.outputs
            .iter()
            .map(|spec| OutputDestination::parse(spec))
            .collect()
    };
    let format = destinations
        .iter()
        .find_map(|destination| match destination {
            OutputDestination::File(path) => DocumentFormat::from_extension(path),
            OutputDestination::Stdout => None,
        })
        .unwrap_or_default();
    OutputOptions::new(format)
        .with_pretty(!cli.no_pretty)
        .with_overwrite(cli.force)
        .with_destinations(destinations)
}
