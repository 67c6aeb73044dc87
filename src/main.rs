use std::process;

use clap::{Arg, ArgAction, Command};

use teamgate_cli::commands::{auth, generate, import, redeem};
use teamgate_cli::logging;

#[tokio::main]
async fn main() {
    // Logging is best effort; a read-only cache dir must not kill the CLI
    let _ = logging::init_logging();

    let app = Command::new("teamgate")
        .about("Team subscription panel CLI - redeem codes, import teams, generate codes")
        .version("1.0.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("auth")
                .about("Manage the admin session")
                .subcommand_required(true)
                .subcommand(
                    Command::new("login")
                        .about("Log in and store the session")
                        .arg(
                            Arg::new("username")
                                .long("username")
                                .short('u')
                                .value_name("NAME")
                                .help("Admin username (prompted if omitted)"),
                        )
                        .arg(
                            Arg::new("password")
                                .long("password")
                                .short('p')
                                .value_name("PASSWORD")
                                .help("Admin password (prompted if omitted)"),
                        ),
                )
                .subcommand(Command::new("status").about("Show whether the session is valid"))
                .subcommand(Command::new("logout").about("End the session and clear the stored token")),
        )
        .subcommand(
            Command::new("redeem")
                .about("Redeem a code and join a team (interactive wizard)")
                .arg(
                    Arg::new("email")
                        .long("email")
                        .short('e')
                        .value_name("EMAIL")
                        .help("Email address to redeem for"),
                )
                .arg(
                    Arg::new("code")
                        .long("code")
                        .short('c')
                        .value_name("CODE")
                        .help("Redemption code"),
                )
                .arg(
                    Arg::new("team")
                        .long("team")
                        .short('t')
                        .value_name("TEAM_ID")
                        .help("Join this team id instead of picking interactively"),
                )
                .arg(
                    Arg::new("auto")
                        .long("auto")
                        .help("Let the server pick a team with a free seat")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("team"),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Import team accounts (admin)")
                .subcommand_required(true)
                .subcommand(
                    Command::new("single")
                        .about("Import one team account")
                        .arg(
                            Arg::new("token")
                                .long("token")
                                .value_name("ACCESS_TOKEN")
                                .help("Account access token")
                                .required(true),
                        )
                        .arg(
                            Arg::new("email")
                                .long("email")
                                .value_name("EMAIL")
                                .help("Account email"),
                        )
                        .arg(
                            Arg::new("account-id")
                                .long("account-id")
                                .value_name("ID")
                                .help("Upstream account id"),
                        ),
                )
                .subcommand(
                    Command::new("batch")
                        .about("Import many accounts from a file or stdin")
                        .arg(
                            Arg::new("file")
                                .value_name("FILE")
                                .help("Input file, '-' or omitted for stdin")
                                .index(1),
                        ),
                ),
        )
        .subcommand(
            Command::new("generate")
                .about("Generate redemption codes (admin)")
                .subcommand_required(true)
                .subcommand(
                    Command::new("single")
                        .about("Generate one code")
                        .arg(
                            Arg::new("code")
                                .long("code")
                                .value_name("CODE")
                                .help("Use this custom code instead of a random one"),
                        )
                        .arg(
                            Arg::new("expires-days")
                                .long("expires-days")
                                .value_name("DAYS")
                                .help("Code validity in days")
                                .value_parser(clap::value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("copy")
                                .long("copy")
                                .help("Copy the generated code to the clipboard")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("batch")
                        .about("Generate a batch of codes")
                        .arg(
                            Arg::new("count")
                                .long("count")
                                .short('n')
                                .value_name("COUNT")
                                .help("Number of codes to generate (1-1000)")
                                .required(true)
                                .value_parser(clap::value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("expires-days")
                                .long("expires-days")
                                .value_name("DAYS")
                                .help("Code validity in days")
                                .value_parser(clap::value_parser!(u32)),
                        )
                        .arg(
                            Arg::new("output")
                                .long("output")
                                .short('o')
                                .value_name("FILE")
                                .help("Write the codes to a file, one per line"),
                        ),
                ),
        );

    let matches = app.get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => auth::handle_auth(sub_matches).await,
        Some(("redeem", sub_matches)) => redeem::handle_redeem(sub_matches).await,
        Some(("import", sub_matches)) => import::handle_import(sub_matches).await,
        Some(("generate", sub_matches)) => generate::handle_generate(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'teamgate --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        logging::log_error(&format!("command failed: {}", e));
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
