//! Session command - the interactive banking menu
//!
//! The loop is written against any `BufRead`/`Write` pair so it can be driven
//! by stdin/stdout or by a script in tests. Nothing is persisted until the
//! user picks "Save & Exit" or input ends.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use bankline_core::domain::transaction::format_amount;
use bankline_core::services::BankService;
use bankline_core::{Account, AccountRepository, Error, LoadSource};
use rust_decimal::Decimal;
use tracing::debug;

use super::{get_context, GlobalArgs};
use crate::output;

const INVALID_AMOUNT: &str = "Invalid amount! Enter a number.";
const INVALID_PIN: &str = "Invalid PIN! Enter digits only.";
const INVALID_CHOICE: &str = "Invalid choice! Try again.";
const AMOUNT_OUT_OF_RANGE: &str = "Amount out of range! Balance unchanged.";

/// Whether the session keeps going after a menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    /// Input ended; save and leave
    Exit,
}

/// Line-oriented console over a reader/writer pair
pub struct Console<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, " {}: ", label)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt until the answer parses as `T`; `None` at end of input
    fn prompt_parsed<T: FromStr>(&mut self, label: &str, invalid: &str) -> io::Result<Option<T>> {
        loop {
            let Some(answer) = self.prompt(label)? else {
                return Ok(None);
            };
            match answer.parse() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => output::error(&mut self.out, invalid)?,
            }
        }
    }
}

pub fn run(args: &GlobalArgs) -> Result<()> {
    let mut ctx = get_context(args)?;
    let interest_rate = ctx.config.interest_rate;
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    run_session(&mut ctx.bank_service, interest_rate, console)
}

/// Run the top-level menu until "Save & Exit" or end of input, then save
pub fn run_session<Repo, R, W>(
    service: &mut BankService<Repo>,
    interest_rate: Decimal,
    mut console: Console<R, W>,
) -> Result<()>
where
    Repo: AccountRepository,
    R: BufRead,
    W: Write,
{
    match service.loaded_from() {
        LoadSource::Existing => output::info(&mut console.out, "Accounts loaded successfully!")?,
        LoadSource::Fresh(_) => {
            output::info(&mut console.out, "No existing accounts found, starting fresh.")?
        }
    }

    loop {
        output::heading(&mut console.out, "Welcome to the Banking System")?;
        writeln!(console.out, "1 Create Account")?;
        writeln!(console.out, "2 Login to Account")?;
        writeln!(console.out, "3 Save & Exit")?;

        let Some(choice) = console.prompt("Choose an option")? else {
            break;
        };
        let flow = match choice.as_str() {
            "1" => create_account(&mut console, service)?,
            "2" => login(&mut console, service, interest_rate)?,
            "3" => break,
            _ => {
                output::error(&mut console.out, INVALID_CHOICE)?;
                Flow::Continue
            }
        };
        if flow == Flow::Exit {
            break;
        }
    }

    save_and_exit(&mut console, service)
}

fn create_account<Repo, R, W>(
    console: &mut Console<R, W>,
    service: &mut BankService<Repo>,
) -> Result<Flow>
where
    Repo: AccountRepository,
    R: BufRead,
    W: Write,
{
    let Some(number) = console.prompt("Enter Account Number")? else {
        return Ok(Flow::Exit);
    };
    let Some(holder) = console.prompt("Enter Account Holder Name")? else {
        return Ok(Flow::Exit);
    };
    let initial_balance =
        console.prompt_parsed::<Decimal>("Enter Initial Balance", INVALID_AMOUNT)?;
    let Some(initial_balance) = initial_balance else {
        return Ok(Flow::Exit);
    };
    let Some(pin) = console.prompt_parsed::<i32>("Set a 4-digit PIN", INVALID_PIN)? else {
        return Ok(Flow::Exit);
    };

    service.create_account(&number, &holder, initial_balance, pin);
    output::success(&mut console.out, "Account created successfully!")?;
    Ok(Flow::Continue)
}

fn login<Repo, R, W>(
    console: &mut Console<R, W>,
    service: &mut BankService<Repo>,
    interest_rate: Decimal,
) -> Result<Flow>
where
    Repo: AccountRepository,
    R: BufRead,
    W: Write,
{
    let Some(number) = console.prompt("Enter Account Number")? else {
        return Ok(Flow::Exit);
    };
    let Some(pin) = console.prompt_parsed::<i32>("Enter PIN", INVALID_PIN)? else {
        return Ok(Flow::Exit);
    };

    match service.login(&number, pin) {
        Some(account) => {
            output::success(&mut console.out, "Login successful!")?;
            account_menu(console, account, interest_rate)
        }
        None => {
            output::error(&mut console.out, "Invalid account number or PIN!")?;
            Ok(Flow::Continue)
        }
    }
}

fn account_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &mut Account,
    interest_rate: Decimal,
) -> Result<Flow> {
    let rate = interest_rate.normalize();

    loop {
        output::heading(
            &mut console.out,
            &format!("Account Menu ({})", account.holder_name()),
        )?;
        writeln!(console.out, "1 Deposit Money")?;
        writeln!(console.out, "2 Withdraw Money")?;
        writeln!(console.out, "3 View Transaction History")?;
        writeln!(console.out, "4 Apply Interest ({}%)", rate)?;
        writeln!(console.out, "5 Logout")?;

        let Some(choice) = console.prompt("Choose an option")? else {
            return Ok(Flow::Exit);
        };
        match choice.as_str() {
            "1" => {
                let amount =
                    console.prompt_parsed::<Decimal>("Enter deposit amount", INVALID_AMOUNT)?;
                let Some(amount) = amount else {
                    return Ok(Flow::Exit);
                };
                match account.deposit(amount) {
                    Ok(()) => output::success(
                        &mut console.out,
                        &format!("{} deposited successfully!", format_amount(amount)),
                    )?,
                    Err(e @ Error::AmountOverflow(_)) => {
                        debug!(error = %e, "deposit rejected");
                        output::error(&mut console.out, AMOUNT_OUT_OF_RANGE)?
                    }
                    Err(e) => {
                        debug!(error = %e, "deposit rejected");
                        output::error(&mut console.out, "Invalid deposit amount!")?
                    }
                }
            }
            "2" => {
                let amount =
                    console.prompt_parsed::<Decimal>("Enter withdrawal amount", INVALID_AMOUNT)?;
                let Some(amount) = amount else {
                    return Ok(Flow::Exit);
                };
                match account.withdraw(amount) {
                    Ok(()) => output::success(
                        &mut console.out,
                        &format!("{} withdrawn successfully!", format_amount(amount)),
                    )?,
                    Err(e @ Error::AmountOverflow(_)) => {
                        debug!(error = %e, "withdrawal rejected");
                        output::error(&mut console.out, AMOUNT_OUT_OF_RANGE)?
                    }
                    Err(e) => {
                        debug!(error = %e, "withdrawal rejected");
                        output::error(&mut console.out, "Insufficient funds or invalid amount!")?
                    }
                }
            }
            "3" => show_history(console, account)?,
            "4" => match account.apply_interest(interest_rate) {
                Ok(_) => output::success(
                    &mut console.out,
                    &format!("Interest applied at {}% rate!", rate),
                )?,
                Err(e) => {
                    debug!(error = %e, "interest rejected");
                    output::error(&mut console.out, AMOUNT_OUT_OF_RANGE)?
                }
            },
            "5" => {
                output::info(&mut console.out, "Logging out...")?;
                return Ok(Flow::Continue);
            }
            _ => output::error(&mut console.out, INVALID_CHOICE)?,
        }
    }
}

fn show_history<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    account: &Account,
) -> io::Result<()> {
    output::heading(
        &mut console.out,
        &format!(
            "Transaction History for {} ({})",
            account.holder_name(),
            account.account_number()
        ),
    )?;
    for entry in account.history() {
        writeln!(console.out, "{}", entry)?;
    }
    Ok(())
}

fn save_and_exit<Repo, R, W>(console: &mut Console<R, W>, service: &BankService<Repo>) -> Result<()>
where
    Repo: AccountRepository,
    R: BufRead,
    W: Write,
{
    match service.save() {
        Ok(()) => output::success(&mut console.out, "Accounts saved successfully!")?,
        Err(e) => output::error(
            &mut console.out,
            &format!("Error saving account data: {}", e),
        )?,
    }
    output::info(&mut console.out, "Exiting. Thank you!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankline_core::adapters::memory::MemoryRepository;
    use bankline_core::domain::result::Result as CoreResult;
    use bankline_core::{AccountStore, FreshReason, LoadOutcome};

    /// Repository whose saves always fail, e.g. a read-only volume
    struct ReadOnlyRepository;

    impl AccountRepository for ReadOnlyRepository {
        fn save(&self, _store: &AccountStore) -> CoreResult<()> {
            Err(Error::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only volume",
            )))
        }

        fn load(&self) -> CoreResult<LoadOutcome> {
            Ok(LoadOutcome::fresh(FreshReason::Missing))
        }
    }

    fn run_script(service: &mut BankService<MemoryRepository>, script: &str) -> String {
        let mut out = Vec::new();
        run_session(
            service,
            Decimal::new(5, 0),
            Console::new(script.as_bytes(), &mut out),
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn open_empty() -> BankService<MemoryRepository> {
        BankService::open(MemoryRepository::new()).unwrap()
    }

    const CREATE_ALICE: &str = "1\n1001\nAlice\n1000\n4321\n";

    #[test]
    fn test_full_session_scenario() {
        let mut service = open_empty();
        let script = format!(
            "{}2\n1001\n4321\n1\n500\n2\n200\n4\n3\n5\n3\n",
            CREATE_ALICE
        );

        let output = run_script(&mut service, &script);

        assert!(output.contains("No existing accounts found, starting fresh."));
        assert!(output.contains("Account created successfully!"));
        assert!(output.contains("Login successful!"));
        assert!(output.contains("Rs.500.00 deposited successfully!"));
        assert!(output.contains("Rs.200.00 withdrawn successfully!"));
        assert!(output.contains("Interest applied at 5% rate!"));
        assert!(output.contains("Transaction History for Alice (1001)"));
        assert!(output.contains("Interest added: Rs.65.00"));
        assert!(output.contains("Logging out..."));
        assert!(output.contains("Accounts saved successfully!"));

        let account = &service.store().accounts()[0];
        assert_eq!(account.balance(), Decimal::new(1365, 0));
        assert_eq!(account.history().len(), 4);
        assert_eq!(service.repository().save_count(), 1);
    }

    #[test]
    fn test_wrong_pin_is_generic_failure() {
        let mut service = open_empty();
        let script = format!("{}2\n1001\n1111\n2\n9999\n4321\n3\n", CREATE_ALICE);

        let output = run_script(&mut service, &script);

        assert_eq!(output.matches("Invalid account number or PIN!").count(), 2);
        assert!(!output.contains("Login successful!"));
    }

    #[test]
    fn test_rejected_amounts_leave_balance_unchanged() {
        let mut service = open_empty();
        let script = format!(
            "{}2\n1001\n4321\n1\n-5\n1\n0\n2\n5000\n2\nabc\n10\n5\n3\n",
            CREATE_ALICE
        );

        let output = run_script(&mut service, &script);

        assert_eq!(output.matches("Invalid deposit amount!").count(), 2);
        assert!(output.contains("Insufficient funds or invalid amount!"));
        assert!(output.contains(INVALID_AMOUNT));

        let account = &service.store().accounts()[0];
        assert_eq!(account.balance(), Decimal::new(990, 0));
        assert_eq!(account.history().len(), 2);
    }

    #[test]
    fn test_invalid_menu_choice_and_pin_reprompt() {
        let mut service = open_empty();
        let output = run_script(&mut service, "9\n1\n1\nBob\n10\nx12\n1234\n3\n");

        assert!(output.contains(INVALID_CHOICE));
        assert!(output.contains(INVALID_PIN));
        assert!(service.store().accounts()[0].authenticate(1234));
    }

    #[test]
    fn test_end_of_input_saves() {
        let mut service = open_empty();
        let output = run_script(&mut service, "1\n7\nBo\n5\n");

        // PIN prompt hit end of input: nothing created, store still saved
        assert!(service.store().is_empty());
        assert_eq!(service.repository().save_count(), 1);
        assert!(output.contains("Accounts saved successfully!"));

        let mut service = open_empty();
        run_script(&mut service, &format!("{}2\n1001\n4321\n1\n", CREATE_ALICE));
        assert_eq!(service.store().len(), 1);
        assert_eq!(service.repository().save_count(), 1);
    }

    #[test]
    fn test_existing_accounts_announced() {
        let mut store = AccountStore::new();
        store.create(Account::new("1", "Ann", Decimal::new(10, 0), 1111));
        let mut service = BankService::open(MemoryRepository::with_store(&store).unwrap()).unwrap();

        let output = run_script(&mut service, "2\n1\n1111\n3\n5\n3\n");

        assert!(output.contains("Accounts loaded successfully!"));
        assert!(output.contains("Account created with balance: Rs.10.00"));
    }

    #[test]
    fn test_amounts_past_decimal_range_are_reported() {
        let mut service = open_empty();
        let script = "1\n7\nMax\n79228162514264337593543950335\n1111\n\
                      2\n7\n1111\n1\n1\n4\n2\n1\n5\n3\n";

        let output = run_script(&mut service, script);

        assert_eq!(output.matches(AMOUNT_OUT_OF_RANGE).count(), 2);
        assert!(output.contains("Rs.1.00 withdrawn successfully!"));
        assert!(output.contains("Accounts saved successfully!"));

        let account = &service.store().accounts()[0];
        assert_eq!(account.balance(), Decimal::MAX - Decimal::ONE);
        assert_eq!(account.history().len(), 2);
        assert_eq!(service.repository().save_count(), 1);
    }

    #[test]
    fn test_failed_save_is_reported_and_session_ends() {
        let mut service = BankService::open(ReadOnlyRepository).unwrap();
        let mut out = Vec::new();

        let result = run_session(
            &mut service,
            Decimal::new(5, 0),
            Console::new(CREATE_ALICE.as_bytes(), &mut out),
        );

        assert!(result.is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Account created successfully!"));
        assert!(output.contains("Error saving account data: IO error: read-only volume"));
        assert!(!output.contains("Accounts saved successfully!"));
        assert!(output.contains("Exiting. Thank you!"));
    }
}
