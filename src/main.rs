use anyhow::Context;
use clap::Parser;
use small_drills::app::exercises::*;
use small_drills::utils::{logger, validation::Validate};
use small_drills::{
    render, Cli, Command, DrillConfig, DrillEngine, Exercise, LocalStorage, OutputFormat,
    Prompter, Result,
};
use std::io;

fn load_config(path: Option<&str>) -> anyhow::Result<DrillConfig> {
    match path {
        Some(path) => DrillConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path)),
        None => Ok(DrillConfig::default()),
    }
}

fn execute<E: Exercise>(exercise: E, config: &DrillConfig, format: OutputFormat) -> Result<()> {
    let stdin = io::stdin();
    // 提示寫到 stderr，stdout 只輸出結果
    let mut prompter = Prompter::new(stdin.lock(), io::stderr(), config.limits.max_line_length);
    let report = DrillEngine::new(exercise).run(&mut prompter)?;
    render(&report, format, &mut io::stdout().lock())
}

fn dispatch(command: Command, config: &DrillConfig, format: OutputFormat) -> Result<()> {
    let limits = config.limits;
    let files = &config.files;
    let storage = LocalStorage::new(&files.workdir);

    match command {
        Command::Majority => execute(
            MajorityExercise {
                max_elements: limits.max_elements,
            },
            config,
            format,
        ),
        Command::MaxSubarray => execute(
            MaxSubarrayExercise {
                max_elements: limits.max_elements,
            },
            config,
            format,
        ),
        Command::WindowSum => execute(
            WindowSumExercise {
                max_elements: limits.max_elements,
            },
            config,
            format,
        ),
        Command::FirstNegative => execute(
            FirstNegativeExercise {
                max_elements: limits.max_elements,
            },
            config,
            format,
        ),
        Command::ProductExceptSelf => execute(
            ProductExceptSelfExercise {
                max_elements: limits.max_elements,
            },
            config,
            format,
        ),
        Command::Transpose => execute(
            MatrixExercise {
                op: MatrixOp::Transpose,
                max_dim: limits.max_matrix_dim,
            },
            config,
            format,
        ),
        Command::Symmetric => execute(
            MatrixExercise {
                op: MatrixOp::Symmetric,
                max_dim: limits.max_matrix_dim,
            },
            config,
            format,
        ),
        Command::Diagonal => execute(
            MatrixExercise {
                op: MatrixOp::Diagonal,
                max_dim: limits.max_matrix_dim,
            },
            config,
            format,
        ),
        Command::Vowel => execute(VowelExercise, config, format),
        Command::CharClasses => execute(CharClassesExercise, config, format),
        Command::Anagram => execute(AnagramExercise, config, format),
        Command::LongestWord => execute(LongestWordExercise, config, format),
        Command::ReverseWords => execute(ReverseWordsExercise, config, format),
        Command::Initials => execute(InitialsExercise { with_surname: false }, config, format),
        Command::InitialsSurname => {
            execute(InitialsExercise { with_surname: true }, config, format)
        }
        Command::CountText { file } => execute(
            TextFileExercise {
                storage,
                path: file,
                metric: TextMetric::Totals,
            },
            config,
            format,
        ),
        Command::CountLetters { file } => execute(
            TextFileExercise {
                storage,
                path: file,
                metric: TextMetric::Letters,
            },
            config,
            format,
        ),
        Command::Copy {
            source,
            destination,
        } => execute(
            CopyExercise {
                storage,
                source,
                destination,
            },
            config,
            format,
        ),
        Command::Uppercase {
            source,
            destination,
        } => execute(
            UppercaseExercise {
                storage,
                source: source.unwrap_or_else(|| files.uppercase_input.clone()),
                destination: destination.unwrap_or_else(|| files.uppercase_output.clone()),
            },
            config,
            format,
        ),
        Command::Append { file } => execute(
            AppendExercise {
                storage,
                path: file.unwrap_or_else(|| files.append_target.clone()),
            },
            config,
            format,
        ),
        Command::Records { file } => execute(
            RecordsExercise {
                storage,
                path: file.unwrap_or_else(|| files.records_path.clone()),
                max_records: limits.max_elements,
            },
            config,
            format,
        ),
        Command::Months { year, month } => {
            execute(MonthsExercise { year, month }, config, format)
        }
        Command::Status { status } => execute(StatusExercise { status }, config, format),
        Command::Calculator => execute(CalculatorExercise, config, format),
        Command::Role => execute(RoleExercise, config, format),
        Command::Diamond => execute(
            DiamondExercise {
                max_rows: limits.max_elements,
            },
            config,
            format,
        ),
        Command::Swap => execute(SwapExercise, config, format),
        Command::Factorial => execute(FactorialExercise, config, format),
    }
}

fn main() {
    let cli = Cli::parse();

    let loaded = load_config(cli.config.as_deref());

    // 日誌格式跟隨輸出格式：CLI 參數優先，其次是配置檔
    let format = match &loaded {
        Ok(config) => config.output_format(cli.format),
        Err(_) => cli.format.unwrap_or_default(),
    };
    match format {
        OutputFormat::Json => logger::init_json_logger(cli.verbose),
        OutputFormat::Text => logger::init_cli_logger(cli.verbose),
    }
    tracing::debug!("CLI arguments: {:?}", cli);

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(3);
        }
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    if let Err(e) = dispatch(cli.command, &config, format) {
        tracing::error!(
            "❌ Exercise failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}
