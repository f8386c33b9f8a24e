use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "claim-ocr")]
#[command(about = "养殖业保险简易赔案处理单 OCR 录入助手", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 识别身份证、银行卡、系统截图并输出赔案处理单
    Recognize {
        /// 图片文件或文件夹
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// 保存识别结果快照（JSON）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 在已有快照的表单上合并（未识别的字段保留原值）
        #[arg(long)]
        base: Option<PathBuf>,

        /// 递归扫描子文件夹
        #[arg(short = 'r', long)]
        recursive: bool,

        /// OCR 接口地址（覆盖配置）
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// 显示快照中的赔案处理单
    Summary {
        /// 快照 JSON 文件
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 生成赔案处理单 Word
    Generate {
        /// 快照 JSON 文件
        #[arg(required = true)]
        input: PathBuf,

        /// 跳过确认
        #[arg(short, long)]
        yes: bool,
    },

    /// 交互式录入
    Session {
        /// 初始图片文件或文件夹
        paths: Vec<PathBuf>,

        /// OCR 接口地址（覆盖配置）
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// 显示/修改配置
    Config {
        /// 设置 OCR 接口地址
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 显示配置
        #[arg(long)]
        show: bool,
    },
}
