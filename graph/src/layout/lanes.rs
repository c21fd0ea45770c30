/// Lane occupancy table used while assigning lanes.
///
/// Each slot holds the node index currently owning the lane, or `None` once
/// the lane has been released. Slots are never removed, so the table length
/// is also the next lane to allocate.
#[derive(Debug, Default)]
pub struct LaneTable {
    slots: Vec<Option<usize>>,
}

impl LaneTable {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Node currently occupying `lane`
    pub fn occupant(&self, lane: usize) -> Option<usize> {
        self.slots.get(lane).copied().flatten()
    }

    /// True when `lane` is free or still held by `owner`
    pub fn is_available_to(&self, lane: usize, owner: usize) -> bool {
        match self.occupant(lane) {
            None => true,
            Some(current) => current == owner,
        }
    }

    /// First released lane, or a freshly allocated one
    pub fn first_free(&mut self) -> usize {
        if let Some(idx) = self.slots.iter().position(|slot| slot.is_none()) {
            return idx;
        }
        self.slots.push(None);
        self.slots.len() - 1
    }

    /// Mark `lane` as owned by `owner`
    pub fn claim(&mut self, lane: usize, owner: usize) {
        if lane >= self.slots.len() {
            self.slots.resize(lane + 1, None);
        }
        self.slots[lane] = Some(owner);
    }

    /// Free `lane` if `owner` still holds it. Returns whether it was freed.
    pub fn release_if_held(&mut self, lane: usize, owner: usize) -> bool {
        match self.slots.get_mut(lane) {
            Some(slot) if *slot == Some(owner) => {
                *slot = None;
                true
            }
            _ => false,
        }
    }

    /// Number of lanes ever allocated
    pub fn lane_count(&self) -> usize {
        self.slots.len()
    }
}
