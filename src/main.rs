use clap::Parser;
use claim_ocr::{cli, config, error, interactive, snapshot, workflow};
use claim_ocr_common::{generate_document, AutoConfirm, Confirm, GenerateOutcome};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use snapshot::ClaimSnapshot;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "执行失败");
        eprintln!("✘ {}", e.user_notice());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    match cli.command {
        Commands::Recognize { paths, output, base, recursive, endpoint } => {
            println!("📎 claim-ocr - 识别\n");

            let form = match &base {
                Some(path) => ClaimSnapshot::load(path)?.form,
                None => config.initial_form(),
            };

            // 1. 读取图片
            println!("[1/3] 读取图片...");
            let mut session = workflow::new_session(&config, form)?;
            workflow::add_paths(&mut session, &paths, recursive)?;
            println!();

            // 2. 识别
            let client = workflow::client(&config, endpoint)?;
            println!("[2/3] 提交识别: {}", client.endpoint());
            workflow::run_recognition(&mut session, &client).await?;
            println!();

            // 3. 输出
            println!("[3/3] 赔案处理单\n");
            println!("{}", session.summary().to_text());

            if let Some(output) = output {
                let sources = session.files().iter().map(|f| f.name.clone()).collect();
                ClaimSnapshot::new(session.form().clone(), sources).save(&output)?;
                println!("✔ 已保存: {}", output.display());
            }
        }

        Commands::Summary { input } => {
            let snapshot = ClaimSnapshot::load(&input)?;
            println!("{}", claim_ocr_common::render_summary(&snapshot.form).to_text());
        }

        Commands::Generate { input, yes } => {
            let snapshot = ClaimSnapshot::load(&input)?;
            let mut confirm: Box<dyn Confirm> = if yes {
                Box::new(AutoConfirm(true))
            } else {
                Box::new(workflow::PromptConfirm)
            };

            match generate_document(confirm.as_mut(), &snapshot.form) {
                GenerateOutcome::Generated { notice } => println!("✅ {}", notice),
                GenerateOutcome::Cancelled => println!("已取消"),
            }
        }

        Commands::Session { paths, endpoint } => {
            let mut session = workflow::new_session(&config, config.initial_form())?;
            if !paths.is_empty() {
                workflow::add_paths(&mut session, &paths, false)?;
            }

            let client = workflow::client(&config, endpoint)?;
            interactive::run_session(session, &client).await?;
        }

        Commands::Config { set_endpoint, show } => {
            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                println!("✔ 已设置 OCR 接口地址");
            }

            if show {
                println!("配置:");
                println!("  配置文件: {}", Config::config_path()?.display());
                println!("  OCR 接口: {}", config.endpoint());
                println!("  超时: {}秒", config.timeout_seconds);
                println!("  最多图片数: {}", config.max_files);
                println!("  缩略图尺寸: {}px", config.thumbnail_size);
                println!(
                    "  默认查勘方式: {}",
                    config.default_inspection_method.as_deref().unwrap_or("未设置")
                );
            }
        }
    }

    Ok(())
}
