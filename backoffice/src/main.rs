//! pos-console - cash desk and back office from the terminal
//!
//! ```bash
//! pos-console --pin 1234 login
//! pos-console --pin 1234 shift open --cash 5000
//! pos-console shift status
//! pos-console shift close --cash 14950
//! pos-console report movements --from 2024-04-01 --to 2024-04-30 --warehouse 1
//! pos-console customers list --search иван
//! ```
//!
//! Connection settings come from `POS_*` environment variables or a `.env`
//! file. Commands other than `login` use `POS_API_TOKEN`, or log in first
//! when `--pin` is given.

use anyhow::Context;
use backoffice::pages::CustomersPage;
use backoffice::pos::{PinPad, ShiftSession};
use backoffice::reports::{MovementReportScreen, parse_period};
use backoffice::{BackofficeError, Config, logger};
use clap::{Parser, Subcommand};
use pos_client::{NetworkHttpClient, PosClient};
use shared::settlement::ShiftSummary;

#[derive(Parser)]
#[command(name = "pos-console")]
#[command(version, about = "Restaurant cash desk and back office console")]
struct Cli {
    /// Log in with this PIN before running the command
    #[arg(long, global = true)]
    pin: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with `--pin` and print the session token
    Login,
    /// Cashier shift
    Shift {
        #[command(subcommand)]
        action: ShiftAction,
    },
    /// Reports
    Report {
        #[command(subcommand)]
        report: ReportKind,
    },
    /// Customer base
    Customers {
        #[command(subcommand)]
        action: CustomersAction,
    },
}

#[derive(Subcommand)]
enum ShiftAction {
    /// Show the open shift and its expected cash
    Status,
    /// Open a shift
    Open {
        /// Cash in the drawer
        #[arg(long)]
        cash: String,
    },
    /// Close the open shift
    Close {
        /// Counted drawer cash
        #[arg(long)]
        cash: String,
    },
}

#[derive(Subcommand)]
enum ReportKind {
    /// Inventory movement report
    Movements {
        /// First day, `YYYY-MM-DD` or `DD.MM.YYYY`
        #[arg(long)]
        from: String,
        /// Last day, inclusive
        #[arg(long)]
        to: String,
        /// Limit to one warehouse
        #[arg(long)]
        warehouse: Option<i64>,
    },
}

#[derive(Subcommand)]
enum CustomersAction {
    /// List customers
    List {
        /// Filter by name, phone, email or group
        #[arg(long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env();
    config.validate().context("invalid configuration")?;
    logger::init_from_config(&config);
    tracing::debug!(api_url = %config.api_url, environment = %config.environment, "pos-console starting");

    let mut client = config.client_config().build().context("failed to create API client")?;

    if let Err(e) = run(cli, &mut client).await {
        tracing::error!(error = %e, "Command failed");
        anyhow::bail!("{}", describe(&e));
    }
    Ok(())
}

async fn run(cli: Cli, client: &mut PosClient<NetworkHttpClient>) -> Result<(), BackofficeError> {
    if let Commands::Login = cli.command {
        let user = login(client, cli.pin.as_deref().unwrap_or_default()).await?;
        println!("Вход выполнен: {} ({:?})", user.name, user.role);
        if let Some(token) = client.token() {
            println!("POS_API_TOKEN={token}");
        }
        return Ok(());
    }

    if let Some(pin) = &cli.pin {
        login(client, pin).await?;
    }
    if !client.is_logged_in() {
        return Err(BackofficeError::NotAuthenticated);
    }

    match cli.command {
        Commands::Login => {}
        Commands::Shift { action } => shift(client, action).await?,
        Commands::Report {
            report: ReportKind::Movements { from, to, warehouse },
        } => movements(client, &from, &to, warehouse).await?,
        Commands::Customers {
            action: CustomersAction::List { search },
        } => customers(client, search).await?,
    }
    Ok(())
}

/// User message, with the field messages of a validation failure
fn describe(e: &BackofficeError) -> String {
    match e {
        BackofficeError::Validation(errors) => errors
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join("; "),
        _ => e.user_message(),
    }
}

async fn login(
    client: &mut PosClient<NetworkHttpClient>,
    pin: &str,
) -> Result<shared::models::UserInfo, BackofficeError> {
    let mut pad = PinPad::new();
    for key in pin.chars() {
        pad.press(key);
    }
    pad.login(client).await
}

fn print_summary(summary: &ShiftSummary) {
    println!("  Наличные на начало: {:>12.2}", summary.opening_cash);
    println!("  Продажи наличными:  {:>12.2}", summary.cash_sales);
    println!("  Продажи картой:     {:>12.2}", summary.card_sales);
    println!("  Внесения:           {:>12.2}", summary.cash_in);
    println!("  Изъятия:            {:>12.2}", summary.cash_out);
    println!("  Возвраты:           {:>12.2}", summary.refunds);
    println!("  Ожидается в кассе:  {:>12.2}", summary.expected_cash);
    println!("  Выручка:            {:>12.2}", summary.total_revenue);
    if let (Some(counted), Some(variance)) = (summary.counted_cash, summary.variance) {
        println!("  Пересчитано:        {counted:>12.2}");
        println!("  Расхождение:        {variance:>12.2}");
    }
}

async fn shift(client: &PosClient<NetworkHttpClient>, action: ShiftAction) -> Result<(), BackofficeError> {
    let mut session = ShiftSession::new();
    session.load(client).await?;
    match action {
        ShiftAction::Status => match (session.shift(), session.summary()) {
            (Some(shift), Some(summary)) => {
                println!(
                    "Смена #{} открыта {} ({}), заказов: {}",
                    shift.id,
                    shift.opened_at.format("%d.%m.%Y %H:%M"),
                    shift.cashier_name,
                    shift.orders_count
                );
                print_summary(&summary);
            }
            _ => println!("Смена не открыта"),
        },
        ShiftAction::Open { cash } => {
            let shift = session.open(client, &cash).await?;
            println!("Смена #{} открыта, в кассе {:.2}", shift.id, shift.opening_cash);
        }
        ShiftAction::Close { cash } => {
            let summary = session.close(client, &cash).await?;
            println!("Смена закрыта");
            print_summary(&summary);
        }
    }
    Ok(())
}

async fn movements(
    client: &PosClient<NetworkHttpClient>,
    from: &str,
    to: &str,
    warehouse: Option<i64>,
) -> Result<(), BackofficeError> {
    let period = parse_period(from, to).map_err(BackofficeError::Validation)?;
    let mut screen = MovementReportScreen::new();
    let report = screen.load(client, period, warehouse).await?;

    println!(
        "{:<30} {:>10} {:>10} {:>10} {:>10} {:>12}",
        "Товар", "Начало", "Приход", "Расход", "Конец", "Сумма"
    );
    for row in &report.rows {
        println!(
            "{:<30} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>12.2}",
            row.item_name, row.opening_qty, row.receipt_qty, row.expense_qty, row.closing_qty, row.closing_sum
        );
    }
    let totals = report.totals();
    println!(
        "Итого: начало {:.2}, приход {:.2}, расход {:.2}, конец {:.2}",
        totals.opening_sum, totals.receipt_sum, totals.expense_sum, totals.closing_sum
    );
    Ok(())
}

async fn customers(client: &PosClient<NetworkHttpClient>, search: Option<String>) -> Result<(), BackofficeError> {
    let mut page = CustomersPage::new("name");
    page.refresh(client).await?;
    if let Some(search) = search {
        page.set_search(search);
    }
    for customer in page.visible() {
        println!(
            "{:>6}  {:<30} {:<16} {:>10.2}",
            customer.id,
            customer.name,
            customer.phone.as_deref().unwrap_or("-"),
            customer.bonus_balance
        );
    }
    Ok(())
}
