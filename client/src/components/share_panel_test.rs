use super::*;

#[test]
fn qr_image_url_requests_square_image_of_target() {
    assert_eq!(
        qr_image_url(SHARE_TARGET, QR_SIZE_PX),
        "https://api.qrserver.com/v1/create-qr-code/?size=100x100&data=https://example.com/comment"
    );
}
