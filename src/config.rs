#[cfg(debug_assertions)]
pub fn get_image_base() -> &'static str {
    "/assets/products"  // Local fixtures when running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_image_base() -> &'static str {
    "https://www.greenwealth.com/web/image"  // Store CDN
}
