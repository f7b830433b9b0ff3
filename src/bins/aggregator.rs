use std::process;

fn main() {
    env_logger::init();
    process::exit(reddit_topics_aggregator::cli::run());
}
