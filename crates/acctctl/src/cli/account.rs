//! Account management commands

use std::io::{self, BufRead, Write};

use acctcore::prompt::PASSWORD_LABEL;
use acctcore::validate::validate_username;
use acctcore::{
    AccountError, AccountService, AddRequest, ConfirmationGate, CredentialStore, DeleteRequest,
    SearchRequest, SecretPrompt, TerminalPrompt,
};
use anyhow::Result;
use clap::Subcommand;

use crate::Config;
use crate::db::{Database, SqliteStore};

#[derive(Subcommand, Debug)]
pub enum AccountCommands {
    /// Create new account
    Add { username: String },
    /// Print the saved accounts
    Print {
        /// Search accounts by username
        #[arg(short, long, default_value = "")]
        search: String,
    },
    /// Delete the saved accounts
    #[command(long_about = "Delete accounts. \
        Accepts space-separated list of usernames. \
        If no arguments, all records will be deleted.")]
    Delete {
        usernames: Vec<String>,
        /// Skip confirmation prompt and delete ALL accounts
        #[arg(short, long)]
        yes: bool,
    },
}

/// Interactive side of the terminal
///
/// Prompts and answers are kept apart from command output so listings stay
/// clean when stdout is piped.
pub struct Interaction<P, R, G> {
    /// Password entry
    pub secrets: P,
    /// Answers to confirmation questions
    pub input: R,
    /// Labels and questions shown to the operator
    pub prompts: G,
}

pub async fn run(config: &Config, command: AccountCommands) -> Result<()> {
    let db = Database::open(&config.database.path).await?;
    let service = AccountService::new(SqliteStore::new(db.clone()));

    let interaction = Interaction {
        secrets: TerminalPrompt,
        input: io::stdin().lock(),
        prompts: io::stdout(),
    };

    let result = execute(&service, command, interaction, &mut io::stdout()).await;
    db.close().await;
    result
}

/// Dispatch one account command
pub async fn execute<S, P, R, G, W>(
    service: &AccountService<S>,
    command: AccountCommands,
    mut interaction: Interaction<P, R, G>,
    out: &mut W,
) -> Result<()>
where
    S: CredentialStore,
    P: SecretPrompt,
    R: BufRead,
    G: Write,
    W: Write,
{
    match command {
        AccountCommands::Add { username } => {
            // No point asking for a password the request cannot use
            validate_username(&username)?;

            writeln!(interaction.prompts, "Username: {}", username)?;
            interaction.prompts.flush()?;

            let password = interaction
                .secrets
                .read_secret(PASSWORD_LABEL)
                .map_err(AccountError::Prompt)?;

            service.add(&AddRequest::new(username, password)).await?;
        }
        AccountCommands::Print { search } => {
            service.search(&SearchRequest::new(search), out).await?;
        }
        AccountCommands::Delete { usernames, yes } => {
            let request = DeleteRequest::new(usernames).assume_yes(yes);
            let mut gate = ConfirmationGate::new(interaction.input, interaction.prompts);
            service.delete(&request, &mut gate, out).await?;
        }
    }

    out.flush()?;
    Ok(())
}
