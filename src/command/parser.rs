//! Line grammar for book commands

use crate::orderbook::{Order, OrderUpdate};
use pricelevel::Side;
use std::str::{FromStr, SplitWhitespace};

use super::error::CommandError;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `SUB <type> <B|S> <id> <qty> [price] [display]`
    Submit(Order),

    /// `CXL <id>`
    Cancel(String),

    /// `CRP <id> <qty> <price>`
    Amend(OrderUpdate),

    /// `END`
    End,
}

struct Fields<'a> {
    tokens: SplitWhitespace<'a>,
}

impl<'a> Fields<'a> {
    fn next(&mut self, field: &'static str) -> Result<&'a str, CommandError> {
        self.tokens.next().ok_or(CommandError::MissingField(field))
    }

    fn number(&mut self, field: &'static str) -> Result<u64, CommandError> {
        let token = self.next(field)?;
        token.parse().map_err(|_| CommandError::InvalidNumber {
            field,
            value: token.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.tokens.next() {
            Some(extra) => Err(CommandError::UnexpectedField(extra.to_string())),
            None => Ok(()),
        }
    }
}

fn parse_side(token: &str) -> Result<Side, CommandError> {
    match token {
        "B" => Ok(Side::Buy),
        "S" => Ok(Side::Sell),
        other => Err(CommandError::UnknownSide(other.to_string())),
    }
}

fn parse_submit(fields: &mut Fields<'_>) -> Result<Order, CommandError> {
    let order_type = fields.next("order type")?;
    let side = parse_side(fields.next("side")?)?;
    let id = fields.next("order id")?;
    let quantity = fields.number("quantity")?;

    let order = match order_type {
        "LO" => Order::limit(id, side, fields.number("price")?, quantity),
        "MO" => Order::market(id, side, quantity),
        "IOC" => Order::immediate_or_cancel(id, side, fields.number("price")?, quantity),
        "FOK" => Order::fill_or_kill(id, side, fields.number("price")?, quantity),
        "ICE" => {
            let price = fields.number("price")?;
            let display_size = fields.number("display size")?;
            Order::iceberg(id, side, price, quantity, display_size)
        }
        other => return Err(CommandError::UnknownOrderType(other.to_string())),
    };
    Ok(order)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut fields = Fields {
            tokens: line.split_whitespace(),
        };
        let command = match fields.tokens.next() {
            None => return Err(CommandError::Empty),
            Some("SUB") => Command::Submit(parse_submit(&mut fields)?),
            Some("CXL") => Command::Cancel(fields.next("order id")?.to_string()),
            Some("CRP") => {
                let id = fields.next("order id")?;
                let quantity = fields.number("quantity")?;
                let price = fields.number("price")?;
                Command::Amend(OrderUpdate::new(id, quantity, price))
            }
            Some("END") => Command::End,
            Some(other) => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        fields.finish()?;
        Ok(command)
    }
}
