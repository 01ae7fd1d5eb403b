mod email_check;
mod helpers;
mod login;
mod startup;
