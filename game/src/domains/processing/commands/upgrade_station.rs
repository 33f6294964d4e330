use crate::processing::Processing::SlotsUpgraded;
use crate::processing::{Processing, ProcessingDomain, Station};

impl ProcessingDomain {
    pub fn station_slots(&self, station: Station) -> usize {
        match station {
            Station::Drying => self.slots.drying,
            Station::Curing => self.slots.curing,
        }
    }

    pub fn upgrade_station(&mut self, station: Station) -> Vec<Processing> {
        let slots = match station {
            Station::Drying => &mut self.slots.drying,
            Station::Curing => &mut self.slots.curing,
        };
        *slots += 1;
        let mut events = vec![SlotsUpgraded {
            station,
            slots: *slots,
        }];
        if station == Station::Drying {
            events.extend(self.fill_drying_slots());
        }
        events
    }
}
