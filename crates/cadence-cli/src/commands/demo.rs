use std::thread::sleep;
use std::time::Duration;

use cadence_core::{Code, Header, KeyValue, Panel, Spinner, Table};

use crate::app::AppContext;
use crate::cli::DemoArgs;

const SAMPLE_CODE: &str = "let mut stream = Stream::new(theme, renderer);\n\
stream.header(Header::new(\"deploy\"))?;\n\
stream.success(\"Build finished\")?;";

const SERVICES: [(&str, &str, &str); 12] = [
    ("api", "running", "3"),
    ("auth", "running", "2"),
    ("billing", "degraded", "1"),
    ("cache", "running", "4"),
    ("cron", "stopped", "0"),
    ("gateway", "running", "2"),
    ("mailer", "running", "1"),
    ("metrics", "running", "1"),
    ("search", "degraded", "2"),
    ("storage", "running", "3"),
    ("web", "running", "6"),
    ("worker", "running", "8"),
];

pub fn handle_demo(ctx: &AppContext, args: &DemoArgs) -> anyhow::Result<()> {
    let mut stream = ctx.stream()?;

    stream.header(
        Header::new("demo")
            .subtitle("Every element, spaced by the theme")
            .app_name("Cadence"),
    )?;

    stream.section("Messages")?;
    stream.info("Resolving workspace")?;
    stream.success("Workspace resolved")?;
    stream.warning("Two services report degraded health")?;
    stream.error("Service cron is stopped")?;

    stream.section("Lists")?;
    stream.text("Deploy order:")?;
    stream.list_item("database migrations")?;
    stream.list_item("api and workers")?;
    stream.list_item("web frontend")?;

    stream.section("Details")?;
    stream.key_value(
        KeyValue::new([
            ("Environment", "staging"),
            ("Region", "eu-west-1"),
            ("Release", "2024.06.1"),
        ])
        .title("Target"),
    )?;
    stream.panel(
        Panel::new("Rollouts pause automatically when error rates exceed the threshold.")
            .title("Note")
            .subtitle("policy"),
    )?;
    stream.code(
        Code::new(SAMPLE_CODE)
            .language("rust")
            .title("usage")
            .line_numbers(true),
    )?;

    if !args.no_spinner {
        let animate = stream.sink().context().animate;
        let mut spinner = stream.spinner(Spinner::new("Checking services"))?;
        if animate {
            sleep(Duration::from_millis(600));
            spinner.set_message("Collecting status")?;
            sleep(Duration::from_millis(400));
        }
        spinner.finish()?;
    }

    let mut table = SERVICES
        .iter()
        .fold(Table::new(["service", "status", "replicas"]), |table, row| {
            table.row([row.0, row.1, row.2])
        })
        .title("Services");
    if let Some(size) = args.page_size {
        table = table.page_size(size);
    }
    stream.table(table)?;

    stream.divider()?;
    stream.success("Demo complete")?;
    Ok(())
}
