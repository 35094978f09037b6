// src/cli.rs
use clap::{Args, Parser, Subcommand};

use crate::logging::LoggingOpts;

#[derive(Parser, Debug)]
#[command(
    name = "text_analyzer",
    version,
    about = "文字列のバイト数/文字数 (rune) を返す Lambda ハンドラー"
)]
pub struct Cli {
    #[command(flatten)]
    pub logging: LoggingOpts,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Subcommand to run; `serve` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Lambda ランタイムのイベントループを開始する (既定)
    Serve,

    /// ハンドラーをローカルで 1 回だけ呼び出し、プロキシレスポンスを出力する
    Invoke(InvokeArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct InvokeArgs {
    /// リクエストボディ (省略時は標準入力から読む)
    #[arg(long)]
    pub body: Option<String>,

    /// レスポンスを整形して出力
    #[arg(long)]
    pub pretty: bool,
}
