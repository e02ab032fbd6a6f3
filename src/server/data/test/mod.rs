mod payment;
mod draft;
mod refresh_token;
mod role_change;
