//! Command handlers
//!
//! Each handler maps one CLI invocation onto one library operation and
//! prints the outcome. Failures propagate to `main`, which prints a single
//! error line and exits non-zero.

use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, bail};
use chrono::Local;

use courier_client::{
    ClientConfig, DebouncedSearch, HttpCourierApi, OrderEditor, PlansApi, ReorderDraft, SearchApi,
    TokensApi, export_report, report_filename,
};
use shared::client::{AssignPlanRequest, CreatePlanRequest, CreateTokenRequest, DriverChoice};
use shared::models::{format_amount, partition_tokens};

use crate::cli::{Command, OrderCommand, PlanCommand, TokenCommand};

pub async fn run(command: Command, api: &HttpCourierApi, config: &ClientConfig) -> anyhow::Result<()> {
    match command {
        Command::Export { range, out } => {
            let kind = range.into();
            let today = Local::now().date_naive();
            let path = out.join(report_filename(kind, today));

            let file = File::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let rows = export_report(api, config, kind, today, &mut writer).await?;

            if rows == 0 {
                println!("No orders in the selected range; wrote empty report {}", path.display());
            } else {
                println!("Exported {} orders to {}", rows, path.display());
            }
        }

        Command::Order(order) => run_order(order, api).await?,

        Command::Token(token) => match token {
            TokenCommand::List => {
                let (active, revoked) = partition_tokens(api.list_tokens().await?);
                println!("Active tokens:");
                for token in &active {
                    println!("  {}  {}", token.id, token.label);
                }
                println!("Revoked tokens:");
                for token in &revoked {
                    println!("  {}  {}", token.id, token.label);
                }
            }
            TokenCommand::Create { label } => {
                let created = api.create_token(&CreateTokenRequest { label }).await?;
                println!("Token created: {}", created.id);
                println!("Plaintext value (shown once, store it now): {}", created.token);
            }
            TokenCommand::Revoke { token_id } => {
                let message = api.revoke_token(&token_id).await?;
                println!("{}", message.unwrap_or_else(|| "Token revoked".to_string()));
            }
        },

        Command::Plan(plan) => match plan {
            PlanCommand::List => {
                for plan in api.list_plans().await? {
                    println!(
                        "{}  {}  delivery {}  return {}",
                        plan.id,
                        plan.name,
                        format_amount(plan.delivery_fee),
                        format_amount(plan.return_fee)
                    );
                }
            }
            PlanCommand::Create {
                name,
                delivery_fee,
                return_fee,
            } => {
                let plan = api
                    .create_plan(&CreatePlanRequest {
                        name,
                        delivery_fee,
                        return_fee,
                    })
                    .await?;
                println!("Plan created: {}  {}", plan.id, plan.name);
            }
            PlanCommand::Assign {
                merchant_id,
                plan_id,
            } => {
                let message = api
                    .assign_plan(&AssignPlanRequest {
                        merchant_id,
                        plan_id,
                    })
                    .await?;
                println!("{}", message.unwrap_or_else(|| "Plan assigned".to_string()));
            }
        },

        Command::Merchant { query } => {
            let search = DebouncedSearch::new();
            let merchants = search.run(|| api.search_merchants(&query)).await?;
            for merchant in merchants.unwrap_or_default() {
                println!(
                    "{}  {}  {}  plan: {}",
                    merchant.id,
                    merchant.name,
                    merchant.phone.unwrap_or_default(),
                    merchant.plan_id.unwrap_or_else(|| "unassigned".to_string())
                );
            }
        }

        Command::Customer { query } => {
            let search = DebouncedSearch::new();
            let customers = search.run(|| api.search_customers(&query)).await?;
            for customer in customers.unwrap_or_default() {
                println!(
                    "{}  {}  {}  {}",
                    customer.id,
                    customer.name,
                    customer.phone.unwrap_or_default(),
                    customer.address.unwrap_or_default()
                );
            }
        }

        Command::Driver { query } => {
            let search = DebouncedSearch::new();
            let drivers = search.run(|| api.search_drivers(&query)).await?;
            for driver in drivers.unwrap_or_default() {
                println!(
                    "{}  {}  {}",
                    driver.id,
                    driver.name,
                    driver.phone.unwrap_or_default()
                );
            }
        }
    }

    Ok(())
}

async fn run_order(command: OrderCommand, api: &HttpCourierApi) -> anyhow::Result<()> {
    match command {
        OrderCommand::Show { task_id } => {
            let editor = OrderEditor::load(api, &task_id).await?;
            let record = editor.record();

            println!("Task        {}", record.task_id);
            println!(
                "Status      {}",
                record
                    .status
                    .map(|s| s.label())
                    .unwrap_or_else(|| "N/A".to_string())
            );
            println!("Pickup      {}", record.pickup_address);
            println!("Delivery    {}", editor.display_delivery_address());
            println!("COD         {}", format_amount(record.cod_amount));
            println!("Fees        {}", format_amount(record.order_fees));
            if let Some(driver) = &record.driver_name {
                println!("Driver      {}", driver);
            }
            if let Some(connected) = &record.connected_task_id {
                println!("Connected   {} (pickup/delivery pair)", connected);
            }
            if let Some(completed) = &record.completed_at {
                println!("Completed   {}", completed);
            }
        }

        OrderCommand::Save {
            task_id,
            cod,
            fees,
            notes,
        } => {
            if cod.is_none() && fees.is_none() && notes.is_none() {
                bail!("nothing to save: pass --cod, --fees or --notes");
            }
            let mut editor = OrderEditor::load(api, &task_id).await?;
            if let Some(cod) = cod {
                editor.set_cod_amount(cod);
            }
            if let Some(fees) = fees {
                editor.set_order_fees(fees);
            }
            if let Some(notes) = notes {
                editor.set_notes(notes);
            }
            let notice = editor.save().await?;
            println!("{}", notice.message);
        }

        OrderCommand::Return { task_id, driver } => {
            let choice = match driver.as_str() {
                "keep" => DriverChoice::Keep,
                "clear" => DriverChoice::Clear,
                id => DriverChoice::Assign(id.to_string()),
            };
            let editor = OrderEditor::load(api, &task_id).await?;
            let notice = editor.create_return(choice).await?;
            println!("{}", notice.message);
        }

        OrderCommand::Reorder {
            task_id,
            cod,
            fees,
            notes,
            driver,
        } => {
            let editor = OrderEditor::load(api, &task_id).await?;
            let notice = editor
                .reorder(ReorderDraft {
                    cod_amount: cod,
                    order_fees: fees,
                    notes,
                    driver_id: driver,
                })
                .await?;
            println!("{}", notice.message);
        }

        OrderCommand::Status {
            task_id,
            status,
            yes,
        } => {
            if !yes {
                bail!("status override requires confirmation: pass --yes");
            }
            let mut editor = OrderEditor::load(api, &task_id).await?;
            let notice = editor.set_status(status.into()).await?;
            println!("{}", notice.message);
        }

        OrderCommand::Delete {
            task_id,
            yes,
            force,
        } => {
            if !yes {
                bail!("deletion requires confirmation: pass --yes");
            }
            let mut editor = OrderEditor::load(api, &task_id).await?;
            let notice = editor.delete(force).await?;
            println!("{}", notice.message);
        }
    }

    Ok(())
}
