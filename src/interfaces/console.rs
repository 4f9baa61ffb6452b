use crate::application::engine::PricingEngine;
use crate::application::form::{CheckoutOutcome, CheckoutSummary, FormController};
use crate::error::Result;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  register [on|off]   toggle or set registration status
  amount <value>      set the purchase amount
  coupon [code]       set or clear the coupon code
  apply               check the coupon code
  check               show whether shipping is free
  checkout            confirm the order
  reset               clear the form
  show                print the order summary
  help                print this message
  quit                leave the session";

/// A parsed session command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Register(Option<bool>),
    Amount(String),
    Coupon(String),
    Apply,
    Check,
    Checkout,
    Reset,
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Returns `Ok(None)` for blank lines and
    /// `Err(message)` for anything unrecognised.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map(|(word, rest)| (word, rest.trim()))
            .unwrap_or((line, ""));

        let command = match word.to_ascii_lowercase().as_str() {
            "register" => match rest.to_ascii_lowercase().as_str() {
                "" => Self::Register(None),
                "on" | "yes" | "true" => Self::Register(Some(true)),
                "off" | "no" | "false" => Self::Register(Some(false)),
                other => return Err(format!("register expects 'on' or 'off', got '{other}'")),
            },
            "amount" => Self::Amount(rest.to_string()),
            "coupon" => Self::Coupon(rest.to_string()),
            "apply" => Self::Apply,
            "check" => Self::Check,
            "checkout" => Self::Checkout,
            "reset" => Self::Reset,
            "show" => Self::Show,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{other}', type 'help' for a list")),
        };
        Ok(Some(command))
    }
}

/// Line-oriented front end for the shipping calculator form.
pub struct Session<'a, W: Write> {
    form: FormController<'a>,
    out: W,
}

impl<'a, W: Write> Session<'a, W> {
    pub fn new(engine: &'a PricingEngine, out: W) -> Self {
        Self {
            form: FormController::new(engine),
            out,
        }
    }

    pub fn form(&self) -> &FormController<'a> {
        &self.form
    }

    /// Processes commands until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        writeln!(self.out, "Shipping fee calculator. Type 'help' for commands.")?;
        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command)?,
                Ok(None) => {}
                Err(message) => writeln!(self.out, "{message}")?,
            }
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Register(flag) => {
                match flag {
                    Some(registered) => self.form.set_registered(registered),
                    None => self.form.toggle_registration(),
                }
                let status = if self.form.is_registered() {
                    "registered"
                } else {
                    "not registered"
                };
                writeln!(self.out, "Customer is {status}")?;
            }
            Command::Amount(raw) => {
                self.form.edit_amount(&raw);
                writeln!(self.out, "Amount: {}", self.form.result().amount)?;
            }
            Command::Coupon(code) => {
                self.form.edit_coupon(&code);
                if code.is_empty() {
                    writeln!(self.out, "Coupon cleared")?;
                } else {
                    writeln!(self.out, "Coupon set to '{code}'")?;
                }
            }
            Command::Apply => {
                if self.form.apply_coupon() {
                    writeln!(self.out, "Coupon is valid!")?;
                } else {
                    writeln!(self.out, "Coupon is invalid")?;
                }
            }
            Command::Check => {
                self.form.check_shipping();
                self.write_summary()?;
            }
            Command::Checkout => match self.form.checkout() {
                CheckoutOutcome::Confirmed(summary) => self.write_confirmation(&summary)?,
                CheckoutOutcome::Rejected(notice) => writeln!(self.out, "{notice}")?,
            },
            Command::Reset => {
                self.form.reset();
                writeln!(self.out, "Form cleared")?;
            }
            Command::Show => self.write_summary()?,
            Command::Help => writeln!(self.out, "{HELP}")?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn write_summary(&mut self) -> Result<()> {
        let result = self.form.result();
        writeln!(self.out, "Amount:   {}", result.amount)?;
        writeln!(self.out, "Coupon:   {}", self.form.coupon_status().label())?;
        writeln!(self.out, "Shipping: {}", result.shipping_fee)?;
        writeln!(self.out, "Total:    {}", result.total)?;
        if self.form.is_result_visible() {
            let verdict = self.form.verdict();
            writeln!(self.out, "{}", verdict.headline())?;
            writeln!(self.out, "{}", verdict.detail(self.form.engine().policy()))?;
        }
        Ok(())
    }

    fn write_confirmation(&mut self, summary: &CheckoutSummary) -> Result<()> {
        let registration = if summary.registered { "yes" } else { "no" };
        let shipping = if summary.result.free_shipping {
            "free".to_string()
        } else {
            summary.result.shipping_fee.to_string()
        };
        writeln!(self.out, "Order confirmed")?;
        writeln!(self.out, "  Registered: {registration}")?;
        writeln!(self.out, "  Coupon:     {}", summary.coupon_status.label())?;
        writeln!(self.out, "  Amount:     {}", summary.result.amount)?;
        writeln!(self.out, "  Shipping:   {shipping}")?;
        writeln!(self.out, "  Total:      {}", summary.result.total)?;
        writeln!(self.out, "Type 'reset' to start a new order.")?;
        Ok(())
    }
}
