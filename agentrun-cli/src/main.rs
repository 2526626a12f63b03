//! agentrun binary: build a run config from file / env / flags, validate it and print it.
//!
//! Exits 1 when the config cannot be loaded or is rejected.

use std::path::PathBuf;

use agentrun::{build_config_summary, TracingObserver};
use agentrun_cli::{init_tracing, load_run_config, render_report, OutputFormat, RunOptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "agentrun")]
#[command(about = "Validate and inspect an agent run configuration")]
struct Args {
    /// JSON file with a run config mapping (camelCase field names)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Streaming mode: NONE, SERVER_SENT_EVENTS (sse) or BIDIRECTIONAL (bidi)
    #[arg(long, value_name = "MODE")]
    streaming_mode: Option<String>,

    /// Upper bound on model calls per run; 0 or less means unbounded
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    max_model_calls: Option<i64>,

    /// Output channels, comma separated (e.g. AUDIO,TEXT)
    #[arg(long, value_name = "LIST", value_delimiter = ',')]
    response_modalities: Option<Vec<String>>,

    /// Persist received input blobs as artifacts
    #[arg(long)]
    save_input_blobs: bool,

    /// Enable experimental compositional function calling
    #[arg(long)]
    compositional_function_calling: bool,

    /// Request transcription of audio output
    #[arg(long)]
    output_audio_transcription: bool,

    /// Speech language code, e.g. en-US
    #[arg(long, value_name = "CODE")]
    language_code: Option<String>,

    /// Prebuilt voice name
    #[arg(long, value_name = "NAME")]
    voice_name: Option<String>,

    /// Ignore .env and AGENTRUN_* environment variables
    #[arg(long)]
    no_env: bool,

    /// Print the config as JSON instead of a summary
    #[arg(long)]
    json: bool,

    /// Debug logs (and, with --json, the summary on stderr)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn to_options(&self) -> RunOptions {
        RunOptions {
            config_path: self.config.clone(),
            streaming_mode: self.streaming_mode.clone(),
            max_model_calls: self.max_model_calls,
            response_modalities: self.response_modalities.clone(),
            save_input_blobs: self.save_input_blobs,
            compositional_function_calling: self.compositional_function_calling,
            output_audio_transcription: self.output_audio_transcription,
            language_code: self.language_code.clone(),
            voice_name: self.voice_name.clone(),
            ignore_env: self.no_env,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match load_run_config(&args.to_options(), &TracingObserver) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.verbose && args.json {
        build_config_summary(&config).print_to_stderr();
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Summary
    };
    match render_report(&config, format) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
