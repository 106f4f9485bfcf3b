use chrono::{DateTime, Local};
use fractic_server_error::ServerError;
use tracing::{debug, info};

use crate::{
    domain::{
        logic::{
            derivations::{compute_stats, filtered_view},
            form_processor::FormProcessor,
        },
        repositories::debts_repository::DebtsRepository,
    },
    entities::{ActiveTab, DashboardStats, Debt, DebtForm, DebtId},
};

type ChangeListener = Box<dyn FnMut(&[Debt])>;

/// Owns the record collection.
///
/// Every effective mutation is written through the repository and then
/// announced to subscribers, which recompute whatever they derive from the
/// collection. Lookups that match nothing change nothing: no write, no
/// notification.
pub struct DebtStore<R: DebtsRepository> {
    debts: Vec<Debt>,
    repository: R,
    listeners: Vec<ChangeListener>,
}

impl<R: DebtsRepository> DebtStore<R> {
    pub fn open(repository: R) -> Result<Self, ServerError> {
        let debts = repository.load()?;
        info!(count = debts.len(), "opened debt store");
        Ok(Self {
            debts,
            repository,
            listeners: Vec::new(),
        })
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn get(&self, id: &DebtId) -> Option<&Debt> {
        self.debts.iter().find(|d| &d.id == id)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&[Debt]) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn stats(&self) -> DashboardStats {
        compute_stats(&self.debts)
    }

    pub fn view(&self, tab: ActiveTab) -> Vec<&Debt> {
        filtered_view(&self.debts, tab)
    }

    /// Puts `debt` at the head of the collection. An id already in use is
    /// replaced by a fresh one.
    pub fn add(&mut self, mut debt: Debt) -> Result<DebtId, ServerError> {
        if self.get(&debt.id).is_some() {
            let millis = Local::now().timestamp_millis();
            debt.id = self.next_id(millis);
        }
        let id = debt.id.clone();
        let mut next = Vec::with_capacity(self.debts.len() + 1);
        next.push(debt);
        next.extend(self.debts.iter().cloned());
        self.commit(next)?;
        info!(id = %id, "added debt");
        Ok(id)
    }

    /// Validates a creation form and adds the resulting record, dated today.
    /// `None` means the form was missing a name or amount and was dropped.
    pub fn submit(&mut self, form: DebtForm) -> Result<Option<DebtId>, ServerError> {
        self.submit_at(form, Local::now())
    }

    pub fn submit_at(
        &mut self,
        form: DebtForm,
        now: DateTime<Local>,
    ) -> Result<Option<DebtId>, ServerError> {
        let id = self.next_id(now.timestamp_millis());
        match FormProcessor::new(form).process(id, now.date_naive())? {
            Some(debt) => self.add(debt).map(Some),
            None => Ok(None),
        }
    }

    /// Flips PENDING/PAID. Returns whether a record matched.
    pub fn toggle_status(&mut self, id: &DebtId) -> Result<bool, ServerError> {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "toggle: no such debt");
            return Ok(false);
        };
        let mut next = self.debts.clone();
        next[index].status = next[index].status.toggled();
        let status = next[index].status;
        self.commit(next)?;
        info!(id = %id, status = ?status, "toggled debt status");
        Ok(true)
    }

    /// Deletes a record. Confirmation is the caller's job. Returns whether a
    /// record was removed.
    pub fn remove(&mut self, id: &DebtId) -> Result<bool, ServerError> {
        let Some(index) = self.position(id) else {
            debug!(id = %id, "remove: no such debt");
            return Ok(false);
        };
        let mut next = self.debts.clone();
        next.remove(index);
        self.commit(next)?;
        info!(id = %id, "removed debt");
        Ok(true)
    }

    fn position(&self, id: &DebtId) -> Option<usize> {
        self.debts.iter().position(|d| &d.id == id)
    }

    fn next_id(&self, mut millis: i64) -> DebtId {
        loop {
            let id = DebtId::from_millis(millis);
            if self.get(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }

    /// Writes `next` and only then adopts it. A failed write leaves the
    /// collection as it was and notifies nobody.
    fn commit(&mut self, next: Vec<Debt>) -> Result<(), ServerError> {
        self.repository.save(&next)?;
        self.debts = next;
        for listener in self.listeners.iter_mut() {
            listener(self.debts.as_slice());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use chrono::TimeZone;

    use super::*;
    use crate::domain::entities::debt::test_utils::debt;
    use crate::entities::{DebtStatus, DebtType};
    use crate::errors::WriteError;

    #[derive(Default, Clone)]
    struct MemoryRepository {
        stored: Rc<RefCell<Vec<Debt>>>,
        saves: Rc<RefCell<usize>>,
    }

    impl DebtsRepository for MemoryRepository {
        fn load(&self) -> Result<Vec<Debt>, ServerError> {
            Ok(self.stored.borrow().clone())
        }

        fn save(&self, debts: &[Debt]) -> Result<(), ServerError> {
            *self.stored.borrow_mut() = debts.to_vec();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    struct FailingRepository {
        stored: Vec<Debt>,
    }

    impl DebtsRepository for FailingRepository {
        fn load(&self) -> Result<Vec<Debt>, ServerError> {
            Ok(self.stored.clone())
        }

        fn save(&self, _debts: &[Debt]) -> Result<(), ServerError> {
            Err(WriteError::new("wb_debts.json"))
        }
    }

    fn form(name: &str, amount: &str, debt_type: DebtType) -> DebtForm {
        DebtForm {
            contact_name: Some(name.to_string()),
            amount: Some(amount.to_string()),
            debt_type,
            notes: None,
        }
    }

    fn at(millis: i64) -> DateTime<Local> {
        Local.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn submit_adds_one_per_valid_form() {
        let repo = MemoryRepository::default();
        let mut store = DebtStore::open(repo.clone()).unwrap();

        store.submit(form("Ali", "50", DebtType::Borrowed)).unwrap().unwrap();
        store.submit(form("Sara", "20", DebtType::Lent)).unwrap().unwrap();
        assert_eq!(store.debts().len(), 2);

        let ignored = store
            .submit(DebtForm {
                contact_name: Some("Omar".into()),
                ..Default::default()
            })
            .unwrap();
        assert!(ignored.is_none());
        assert_eq!(store.debts().len(), 2);
        assert_eq!(repo.stored.borrow().len(), 2);
        assert_eq!(*repo.saves.borrow(), 2);
    }

    #[test]
    fn new_record_heads_the_views() {
        let mut store = DebtStore::open(MemoryRepository::default()).unwrap();
        let now = Local::now();
        store.submit_at(form("Sara", "10", DebtType::Lent), now).unwrap();
        store.submit_at(form("Omar", "30", DebtType::Borrowed), now).unwrap();
        let id = store
            .submit_at(form("Ali", "50", DebtType::Borrowed), now)
            .unwrap()
            .unwrap();

        let head = store.view(ActiveTab::All)[0];
        assert_eq!(head.id(), &id);
        assert_eq!(head.contact_name(), "Ali");
        assert_eq!(head.status(), DebtStatus::Pending);
        assert_eq!(store.view(ActiveTab::Borrowed)[0].id(), &id);
        assert!(store.view(ActiveTab::Lent).iter().all(|d| d.id() != &id));
    }

    #[test]
    fn same_millisecond_submissions_get_distinct_ids() {
        let mut store = DebtStore::open(MemoryRepository::default()).unwrap();
        let a = store.submit_at(form("A", "1", DebtType::Lent), at(1_000)).unwrap().unwrap();
        let b = store.submit_at(form("B", "1", DebtType::Lent), at(1_000)).unwrap().unwrap();
        assert_eq!(a.as_str(), "1000");
        assert_eq!(b.as_str(), "1001");
    }

    #[test]
    fn add_replaces_duplicate_id() {
        let mut store = DebtStore::open(MemoryRepository::default()).unwrap();
        let first = debt("1", DebtType::Lent, 5.0, DebtStatus::Pending, (2026, 1, 1));
        store.add(first.clone()).unwrap();
        let second = store.add(first).unwrap();
        assert_ne!(second.as_str(), "1");
        assert_eq!(store.debts().len(), 2);
    }

    #[test]
    fn toggle_twice_restores_status() {
        let mut store = DebtStore::open(MemoryRepository::default()).unwrap();
        let id = store.submit(form("Ali", "50", DebtType::Borrowed)).unwrap().unwrap();

        assert!(store.toggle_status(&id).unwrap());
        assert_eq!(store.get(&id).unwrap().status(), DebtStatus::Paid);
        assert!(store.toggle_status(&id).unwrap());
        assert_eq!(store.get(&id).unwrap().status(), DebtStatus::Pending);
    }

    #[test]
    fn unknown_ids_are_noops() {
        let repo = MemoryRepository::default();
        let mut store = DebtStore::open(repo.clone()).unwrap();
        store.submit(form("Ali", "50", DebtType::Borrowed)).unwrap();
        let before = store.debts().to_vec();
        let saves = *repo.saves.borrow();

        let missing = DebtId::new("missing");
        assert!(!store.toggle_status(&missing).unwrap());
        assert!(!store.remove(&missing).unwrap());
        assert_eq!(store.debts(), before.as_slice());
        assert_eq!(*repo.saves.borrow(), saves);
    }

    #[test]
    fn remove_drops_exactly_one() {
        let mut store = DebtStore::open(MemoryRepository::default()).unwrap();
        let a = store.submit(form("A", "1", DebtType::Lent)).unwrap().unwrap();
        store.submit(form("B", "2", DebtType::Borrowed)).unwrap();

        assert!(store.remove(&a).unwrap());
        assert_eq!(store.debts().len(), 1);
        assert!(store.get(&a).is_none());
    }

    #[test]
    fn subscribers_see_every_change() {
        let mut store = DebtStore::open(MemoryRepository::default()).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |debts| sink.borrow_mut().push(compute_stats(debts).balance));

        let id = store.submit(form("Sara", "100", DebtType::Lent)).unwrap().unwrap();
        store.submit(form("Ali", "40", DebtType::Borrowed)).unwrap();
        store.toggle_status(&id).unwrap();
        store.toggle_status(&DebtId::new("missing")).unwrap();

        assert_eq!(*seen.borrow(), vec![100.0, 60.0, -40.0]);
    }

    #[test]
    fn marking_everything_paid_zeroes_stats() {
        let mut store = DebtStore::open(MemoryRepository::default()).unwrap();
        let ids: Vec<DebtId> = [("A", "100", DebtType::Lent), ("B", "40", DebtType::Borrowed)]
            .into_iter()
            .map(|(n, a, t)| store.submit(form(n, a, t)).unwrap().unwrap())
            .collect();
        for id in &ids {
            store.toggle_status(id).unwrap();
        }
        assert_eq!(store.stats(), DashboardStats::default());
    }

    #[test]
    fn failed_writes_leave_collection_and_listeners_untouched() {
        let existing = debt("1", DebtType::Lent, 100.0, DebtStatus::Pending, (2026, 1, 1));
        let mut store = DebtStore::open(FailingRepository {
            stored: vec![existing.clone()],
        })
        .unwrap();
        let fired = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&fired);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(store.submit(form("Ali", "50", DebtType::Borrowed)).is_err());
        assert_eq!(store.debts(), &[existing.clone()][..]);

        assert!(store.toggle_status(existing.id()).is_err());
        assert_eq!(store.get(existing.id()).unwrap().status(), DebtStatus::Pending);

        assert!(store.remove(existing.id()).is_err());
        assert_eq!(store.debts(), &[existing][..]);

        assert_eq!(*fired.borrow(), 0);
        assert_eq!(store.stats().total_lent, 100.0);
    }
}
