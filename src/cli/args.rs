// src/cli/args.rs
use clap::{Args as ClapArgs, Parser, Subcommand};
use count_bits_shared_kernel::BitField;

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "count_bits",
    version = crate::VERSION,
    about = "下位16ビットのビット数集計ツール",
    long_about = "下位16ビットのうち1のビット数を数えます。\n\
                  サブコマンド省略時はセルフテストを実行し、失敗したケース番号 (1-5) を終了コードとして返します。"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 固定ケースでセルフテストを実行（終了コード: 0=成功, 1-5=失敗ケース番号）
    SelfTest(SelfTestArgs),
    /// 値ごとの下位16ビットのビット数を表示
    Count(CountArgs),
    /// "Hello World!!" を1文字ずつ出力
    Hello,
}

#[derive(ClapArgs, Debug, Default)]
pub struct SelfTestArgs {
    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// 各ケースの結果を表示
    #[arg(short, long, help_heading = "出力")]
    pub verbose: bool,
}

#[derive(ClapArgs, Debug)]
pub struct CountArgs {
    /// 対象の値（10進, 0x16進, 0b2進, 0o8進。`_` 区切り可）
    #[arg(value_name = "VALUE", required_unless_present = "stdin")]
    pub values: Vec<BitField>,

    /// 標準入力から空白区切りで値を読む
    #[arg(long, help_heading = "入力")]
    pub stdin: bool,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "table", help_heading = "出力")]
    pub format: CliOutputFormat,

    /// CSV/TSV/表に合計行を追加
    #[arg(long, help_heading = "出力")]
    pub total_row: bool,
}
