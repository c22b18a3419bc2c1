use crate::data_types::DataPoint;

/// Called with the full ordered contents after every change.
pub type PointsObserver = Box<dyn FnMut(&[DataPoint])>;

/// Insertion-ordered collection of user-placed points.
///
/// Matching is by exact equality. Points reaching the store have all been
/// quantized by the same mapper, so equal clicks produce equal values.
#[derive(Default)]
pub struct PlacedPointStore {
    points: Vec<DataPoint>,
    observer: Option<PointsObserver>,
}

impl std::fmt::Debug for PlacedPointStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacedPointStore")
            .field("points", &self.points)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl PlacedPointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: impl FnMut(&[DataPoint]) + 'static) -> Self {
        Self {
            points: Vec::new(),
            observer: Some(Box::new(observer)),
        }
    }

    pub fn set_observer(&mut self, observer: Option<PointsObserver>) {
        self.observer = observer;
    }

    pub fn add(&mut self, point: DataPoint) {
        self.points.push(point);
        self.notify();
    }

    /// Removes the first point exactly equal to `point`. Returns false, and
    /// does not notify, when there is none.
    pub fn remove_exact(&mut self, point: DataPoint) -> bool {
        match self.points.iter().position(|p| *p == point) {
            Some(index) => {
                self.points.remove(index);
                self.notify();
                true
            }
            None => false,
        }
    }

    /// Undo: drops the most recently added point.
    pub fn remove_last(&mut self) -> Option<DataPoint> {
        let removed = self.points.pop();
        if removed.is_some() {
            self.notify();
        }
        removed
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.notify();
    }

    /// Bulk restore, e.g. when resuming an earlier answer.
    pub fn replace_all(&mut self, points: Vec<DataPoint>) {
        self.points = points;
        self.notify();
    }

    pub fn list(&self) -> Vec<DataPoint> {
        self.points.clone()
    }

    pub fn as_slice(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn contains(&self, point: DataPoint) -> bool {
        self.points.contains(&point)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Copy of the contents sorted by x. Only for drawing; insertion order
    /// stays authoritative.
    pub fn sorted_by_x(&self) -> Vec<DataPoint> {
        let mut sorted = self.points.clone();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
        sorted
    }

    fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.points);
        }
    }
}
