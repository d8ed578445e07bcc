//! Synthetic records for filling a development database.
//!
//! Only built with the `fixtures` feature; no production route depends on it.

use chrono::{Days, NaiveDate};
use models::{task, user_v1, user_v2, ResourceKind, Task, UserV1, UserV2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::errors::ServiceError;
use crate::resource::repository::ResourceRepository;
use crate::resource::service::ResourceService;

const FIRST_NAMES: &[&str] = &["Ada", "Alan", "Grace", "Linus", "Ken", "Barbara", "Dennis", "Margaret", "Edsger", "Frances"];
const LAST_NAMES: &[&str] = &["Lovelace", "Turing", "Hopper", "Torvalds", "Thompson", "Liskov", "Ritchie", "Hamilton", "Dijkstra", "Allen"];
const STREETS: &[&str] = &["Main Street", "Oak Avenue", "Harbor Road", "Mill Lane", "Station Square"];
const CHORES: &[&str] = &["Buy milk", "Water plants", "Pay rent", "Call plumber", "Fix bike", "Read book"];
const DOMAINS: &[&str] = &["example.com", "example.org", "mail.test"];

fn pick<'a>(rng: &mut StdRng, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or_default()
}

/// A kind that can produce valid random inputs.
pub trait Synthetic: ResourceKind {
    /// `seq` keeps generated usernames and emails distinct within one batch.
    fn synthetic(rng: &mut StdRng, seq: usize) -> Self::Input;
}

impl Synthetic for UserV1 {
    fn synthetic(rng: &mut StdRng, seq: usize) -> user_v1::Input {
        let first = pick(rng, FIRST_NAMES).to_lowercase();
        let username = format!("{first}{seq}");
        let password: String = (0..16).map(|_| rng.sample(rand::distributions::Alphanumeric) as char).collect();
        user_v1::Input { email: format!("{username}@{}", pick(rng, DOMAINS)), username, password }
    }
}

impl Synthetic for UserV2 {
    fn synthetic(rng: &mut StdRng, seq: usize) -> user_v2::Input {
        let first_name = pick(rng, FIRST_NAMES).to_string();
        let last_name = pick(rng, LAST_NAMES).to_string();
        let base = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap_or(NaiveDate::MIN);
        let birthday = base.checked_add_days(Days::new(rng.gen_range(0..20_000))).unwrap_or(base);
        let email = format!("{}.{}{seq}@{}", first_name.to_lowercase(), last_name.to_lowercase(), pick(rng, DOMAINS));
        let address = format!("{} {}", rng.gen_range(1..999), pick(rng, STREETS));
        user_v2::Input { first_name, last_name, birthday, email, address }
    }
}

impl Synthetic for Task {
    fn synthetic(rng: &mut StdRng, seq: usize) -> task::Input {
        task::Input {
            title: pick(rng, CHORES).to_string(),
            description: format!("generated task #{seq}"),
            done: rng.gen_bool(0.5),
        }
    }
}

/// Insert `count` synthetic records through the service, returning how many were stored.
pub async fn seed<K, R>(svc: &ResourceService<K, R>, count: usize) -> Result<usize, ServiceError>
where
    K: Synthetic,
    R: ResourceRepository<K>,
{
    let mut rng = StdRng::from_entropy();
    for seq in 0..count {
        svc.create(K::synthetic(&mut rng, seq)).await?;
    }
    info!(resource = K::COLLECTION, count, "seeded synthetic records");
    Ok(count)
}
