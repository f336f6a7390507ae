//! 命令列入口
//!
//! 用法：`stockopt [--json] [--lang tr|en] <storage_cost> <order_cost> <demand> <capacity> <user_stock> <user_order> <profit_per_unit>`
//!
//! 環境變數 `STOCKOPT_CONFIG` 可指向 JSON 格式的報表配置。

use std::process::ExitCode;

use anyhow::{bail, Context};
use stockopt::{logging, InventoryInputs, Locale, ReportConfig, StockError, StockOptimizer};

const CONFIG_ENV: &str = "STOCKOPT_CONFIG";

/// 命令列參數
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    json: bool,
    locale: Option<Locale>,
    fields: Vec<String>,
}

impl CliArgs {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> anyhow::Result<Self> {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--lang" => {
                    let code = args.next().context("--lang 需要語系代碼")?;
                    parsed.locale = Some(Locale::from_code(&code)?);
                }
                // 負數也是合法欄位值
                flag if flag.starts_with("--") => bail!("未知的參數: {}", flag),
                _ => parsed.fields.push(arg),
            }
        }

        Ok(parsed)
    }
}

fn load_config(locale: Option<Locale>) -> anyhow::Result<ReportConfig> {
    let mut config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("無法讀取配置檔 {}", path))?;
            ReportConfig::from_json(&json)?
        }
        Err(_) => ReportConfig::default(),
    };
    if let Some(locale) = locale {
        config = config.with_locale(locale);
    }
    Ok(config)
}

fn run(args: &CliArgs, config: ReportConfig) -> anyhow::Result<String> {
    let inputs = InventoryInputs::from_fields(args.fields.as_slice())?;
    let optimizer = StockOptimizer::new(config);

    if args.json {
        let report = optimizer.analyze(&inputs)?;
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(optimizer.solve_and_report(&inputs)?)
    }
}

fn main() -> ExitCode {
    logging::init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(2);
        }
    };

    let config = match load_config(args.locale) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::from(2);
        }
    };
    let locale = config.locale;

    match run(&args, config) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("計算失敗: {:#}", e);
            match e.downcast_ref::<StockError>() {
                Some(stock_error) => eprintln!("{}", stock_error.user_message(locale)),
                None => eprintln!("{:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}
