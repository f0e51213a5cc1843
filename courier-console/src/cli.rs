//! Command-line interface definition

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use courier_client::{ReportKind, StatusCode};

/// Admin console for the last-mile delivery operation
#[derive(Debug, Parser)]
#[command(name = "courier-console", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Export an order report as a CSV artifact
    Export {
        /// Report range
        #[arg(long, value_enum, default_value_t = RangeArg::Daily)]
        range: RangeArg,
        /// Output directory for the artifact
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Inspect and edit orders
    #[command(subcommand)]
    Order(OrderCommand),
    /// Manage API tokens
    #[command(subcommand)]
    Token(TokenCommand),
    /// Manage merchant fee plans
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Search merchants by name or phone
    Merchant {
        query: String,
    },
    /// Search customers by name or phone
    Customer {
        query: String,
    },
    /// Search drivers by name or phone
    Driver {
        query: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RangeArg {
    Daily,
    Monthly,
}

impl From<RangeArg> for ReportKind {
    fn from(arg: RangeArg) -> Self {
        match arg {
            RangeArg::Daily => ReportKind::Daily,
            RangeArg::Monthly => ReportKind::Monthly,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum OrderCommand {
    /// Fetch one order and its connected-task resolution
    Show { task_id: String },
    /// Save edited COD, fees and notes
    Save {
        task_id: String,
        #[arg(long)]
        cod: Option<Decimal>,
        #[arg(long)]
        fees: Option<Decimal>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Create a return task with swapped addresses
    Return {
        task_id: String,
        /// Driver on the return: "keep", "clear" or a driver ID
        #[arg(long, default_value = "keep")]
        driver: String,
    },
    /// Create a new task copied from an existing order
    Reorder {
        task_id: String,
        #[arg(long)]
        cod: Option<Decimal>,
        #[arg(long)]
        fees: Option<Decimal>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        driver: Option<String>,
    },
    /// Directly override the order status
    Status {
        task_id: String,
        #[arg(value_enum)]
        status: StatusArg,
        /// Confirm the override
        #[arg(long)]
        yes: bool,
    },
    /// Delete the task (cascades to the connected task)
    Delete {
        task_id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
        /// Delete even a Successful order
        #[arg(long)]
        force: bool,
    },
}

/// Statuses that may be set directly, bypassing the normal lifecycle
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Successful,
    Failed,
    Deleted,
}

impl From<StatusArg> for StatusCode {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Successful => StatusCode::Successful,
            StatusArg::Failed => StatusCode::Failed,
            StatusArg::Deleted => StatusCode::Deleted,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// List active and revoked tokens
    List,
    /// Create a token; the plaintext value is shown exactly once
    Create {
        #[arg(long)]
        label: String,
    },
    /// Revoke a token
    Revoke { token_id: String },
}

#[derive(Debug, Subcommand)]
pub enum PlanCommand {
    /// List fee plans
    List,
    /// Create a fee plan
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        delivery_fee: Decimal,
        #[arg(long)]
        return_fee: Decimal,
    },
    /// Link a merchant to a plan
    Assign {
        merchant_id: String,
        plan_id: String,
    },
}
