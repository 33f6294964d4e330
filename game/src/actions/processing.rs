use crate::api::{ActionError, Event};
use crate::formulas::processing_slot_cost;
use crate::processing::{BatchId, Station};
use crate::{occur, Game};

fn collect_xp(grams: f64) -> u64 {
    ((grams / 40.0).floor() as u64).max(1)
}

fn press_xp(output: f64) -> u64 {
    ((output / 5.0).floor() as u64).max(1)
}

impl Game {
    /// Moves a ready batch into the dry stock.
    pub(crate) fn collect_batch(&mut self, batch: BatchId) -> Result<Vec<Event>, ActionError> {
        let (batch, collect_batch) = self.processing.collect_batch(batch)?;
        Ok(occur![
            collect_batch(),
            self.economy.add_stock(batch.grams, batch.quality),
            self.progress.gain_xp(collect_xp(batch.grams)),
        ])
    }

    pub(crate) fn collect_all(&mut self) -> Result<Vec<Event>, ActionError> {
        let (batches, collect_all) = self.processing.collect_all()?;
        let mut events = occur![collect_all()];
        for batch in batches {
            events.push(self.economy.add_stock(batch.grams, batch.quality).into());
            events.push(self.progress.gain_xp(collect_xp(batch.grams)).into());
        }
        Ok(events)
    }

    pub(crate) fn press_batch(&mut self, batch: BatchId) -> Result<Vec<Event>, ActionError> {
        let (output, press_batch) = self.processing.press_batch(batch)?;
        Ok(occur![
            press_batch(),
            self.economy.add_concentrate(output),
            self.progress.gain_xp(press_xp(output)),
        ])
    }

    pub(crate) fn upgrade_station(&mut self, station: Station) -> Result<Vec<Event>, ActionError> {
        let cost = processing_slot_cost(self.processing.station_slots(station));
        let spend_cash = self.economy.spend_cash(cost)?;
        Ok(occur![
            spend_cash(),
            self.processing.upgrade_station(station),
        ])
    }
}
