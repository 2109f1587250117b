// Push notifications behind the Notifier trait.
//
// PushPlusNotifier posts to pushplus.plus. NoopNotifier stands in when no
// token is configured or the user passed --no-notify.

pub mod pushplus;
pub mod traits;
