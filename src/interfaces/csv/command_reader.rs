use crate::application::service::Command;
use crate::domain::fee::FeePlan;
use crate::domain::money::Money;
use crate::domain::payment::PaymentMethod;
use crate::domain::vehicle::{Vehicle, VehicleCategory, VehicleId};
use crate::error::{ParkingError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Park,
    Unpark,
    Status,
}

/// One row of a command script: `op, vehicle, category, plan, method, amount`.
///
/// Columns an operation does not use are left empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CommandRecord {
    pub op: Operation,
    pub vehicle: Option<VehicleId>,
    pub category: Option<VehicleCategory>,
    pub plan: Option<FeePlan>,
    pub method: Option<PaymentMethod>,
    pub amount: Option<Money>,
}

fn required<T>(value: Option<T>, op: &str, column: &str) -> Result<T> {
    value.ok_or_else(|| ParkingError::InvalidCommand(format!("{op} is missing the {column} column")))
}

impl TryFrom<CommandRecord> for Command {
    type Error = ParkingError;

    fn try_from(record: CommandRecord) -> Result<Self> {
        match record.op {
            Operation::Park => {
                let id = required(record.vehicle, "park", "vehicle")?;
                let category = required(record.category, "park", "category")?;
                let plan = required(record.plan, "park", "plan")?;
                Ok(Command::Park(Vehicle::new(id, category, plan.strategy())))
            }
            Operation::Unpark => Ok(Command::Unpark {
                id: required(record.vehicle, "unpark", "vehicle")?,
                payment: required(record.method, "unpark", "method")?.strategy(),
                tendered: required(record.amount, "unpark", "amount")?,
            }),
            Operation::Status => Ok(Command::Status),
        }
    }
}

/// Reads a command script from a CSV source.
///
/// Whitespace around fields is trimmed and short rows are accepted, so
/// `status` can be written without trailing commas.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily parses each row into a `Command`.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader.into_deserialize().map(|result| {
            let record: CommandRecord = result.map_err(ParkingError::from)?;
            Command::try_from(record)
        })
    }
}
