use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::models::Comment;
use crate::store::Store;

pub const POSITIVE_PER_BLOCK: usize = 4;
pub const BULLYING_PER_BLOCK: usize = 6;

/// Shuffle the pool and lay it out in balanced blocks.
///
/// Each block holds four positive and six bullying comments in random order.
/// Once either side runs short, the leftover positives and then the leftover
/// bullying comments follow in their shuffled order.
pub fn sample<R: Rng + ?Sized>(mut pool: Vec<Comment>, rng: &mut R) -> Vec<Comment> {
    pool.shuffle(rng);

    let (positive, bullying): (Vec<Comment>, Vec<Comment>) =
        pool.into_iter().partition(|c| !c.category.is_bullying());

    balance(positive, bullying, rng)
}

fn balance<R: Rng + ?Sized>(
    positive: Vec<Comment>,
    bullying: Vec<Comment>,
    rng: &mut R,
) -> Vec<Comment> {
    let mut output = Vec::with_capacity(positive.len() + bullying.len());
    let mut positive_left = positive.len();
    let mut bullying_left = bullying.len();
    let mut positive = positive.into_iter();
    let mut bullying = bullying.into_iter();

    while positive_left >= POSITIVE_PER_BLOCK && bullying_left >= BULLYING_PER_BLOCK {
        let mut block: Vec<Comment> = positive
            .by_ref()
            .take(POSITIVE_PER_BLOCK)
            .chain(bullying.by_ref().take(BULLYING_PER_BLOCK))
            .collect();
        block.shuffle(rng);
        output.append(&mut block);

        positive_left -= POSITIVE_PER_BLOCK;
        bullying_left -= BULLYING_PER_BLOCK;
    }

    output.extend(positive);
    output.extend(bullying);
    output
}

/// Fetch the whole pool and return it in presentation order.
pub async fn sample_comments(store: &dyn Store) -> Result<Vec<Comment>> {
    let pool = store.fetch_all_comments().await?;
    let total = pool.len();

    let mut rng = StdRng::from_entropy();
    let comments = sample(pool, &mut rng);

    tracing::debug!(total, "Sampled comment pool");
    Ok(comments)
}
