//! Builds the pre-filled social share link for a computed total.

use url::Url;

const TWEET_INTENT_BASE: &str = "https://twitter.com/intent/tweet";

/// Returns the tweet-intent URL pre-filled with the computed total.
///
/// The UI opens this in the system browser; nothing is sent anywhere
/// by this crate.
///
/// # Panics
///
/// Never panics: the base URL is a compile-time constant known to parse.
#[must_use]
pub fn share_url(total_tons: f64) -> Url {
    let text = format!(
        "I just calculated my carbon footprint: {total_tons:.2} tons CO2/year using EcoBot! \
         🌱 Taking action to reduce my environmental impact. \
         #CarbonFootprint #ClimateAction #Sustainability"
    );
    let mut url = Url::parse(TWEET_INTENT_BASE).expect("static base url is valid");
    url.query_pairs_mut().append_pair("text", &text);
    url
}
