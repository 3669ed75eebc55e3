use hashtag_trends::{HashtagText, StaticSourceGroup, TrendAggregator};

fn main() {
    env_logger::init();

    let posts = StaticSourceGroup::new(
        "posts",
        ["I love #react and #javascript", "#react is great"],
    );
    let comments = StaticSourceGroup::new("comments", ["totally agree #react"]);
    let bios = StaticSourceGroup::new("bios", ["#javascript developer"]);

    let mut aggregator = TrendAggregator::new();
    let trends = aggregator.recompute(&[&posts, &comments, &bios]);

    println!("Trending hashtags:");
    for (rank, trend) in trends.iter().enumerate() {
        println!("{}. {} ({})", rank + 1, trend.hashtag(), trend.count);
    }

    let text = HashtagText::new("Mi café favorito #café");
    text.click(1, &mut |tag: &str| println!("Clicked hashtag: {}", tag));
}
