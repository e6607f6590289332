//! Inline stylesheet and script shipped with the landing page.

/// Swaps the submit label and locks the button as soon as the browser posts the form, and
/// smooth-scrolls to the form from the hero call to action.
pub const SCRIPT: &str = r#"
document.addEventListener("DOMContentLoaded", function () {
  document.querySelectorAll("[data-scroll-to]").forEach(function (link) {
    link.addEventListener("click", function (event) {
      var target = document.getElementById(link.getAttribute("data-scroll-to"));
      if (target) {
        event.preventDefault();
        target.scrollIntoView({ behavior: "smooth" });
      }
    });
  });

  var form = document.querySelector("form.form");
  if (!form) {
    return;
  }
  form.addEventListener("submit", function (event) {
    var button = form.querySelector("button[type=submit]");
    if (button.disabled) {
      event.preventDefault();
      return;
    }
    button.disabled = true;
    button.textContent = button.getAttribute("data-busy-label");
  });
});
"#;

pub const STYLESHEET: &str = r#"
:root {
  --bg-dark: #050509;
  --bg-light: #f5f5f7;
  --primary: #ff5a3c;
  --text-main: #fdfdfd;
  --text-muted: #c4c4cf;
  --border-subtle: rgba(255,255,255,0.08);
  --radius-lg: 18px;
  --radius-xl: 26px;
  --shadow-soft: 0 18px 45px rgba(0,0,0,0.45);
  --container-width: 1100px;
}
* { box-sizing: border-box; }
html, body {
  padding: 0;
  margin: 0;
  font-family: system-ui, -apple-system, BlinkMacSystemFont, "SF Pro Text", sans-serif;
  background: var(--bg-dark);
  color: var(--text-main);
  scroll-behavior: smooth;
}
.page { min-height: 100vh; background: radial-gradient(circle at top left, #1b1225, #050509 55%, #020208); }
.hero { position: relative; height: 100vh; min-height: 640px; overflow: hidden; display: flex; justify-content: center; }
.hero-overlay {
  position: absolute;
  inset: 0;
  background-image: linear-gradient(to bottom, rgba(0,0,0,0.3), rgba(0,0,0,0.92)), url("/bg4.jpg");
  background-size: cover;
  background-position: center;
  opacity: 0.9;
  z-index: 1;
}
.hero-content {
  position: relative;
  z-index: 2;
  padding: 24px 20px 40px;
  max-width: var(--container-width);
  width: 100%;
  display: flex;
  flex-direction: column;
  justify-content: space-between;
}
.hero-header { display: flex; align-items: center; justify-content: space-between; gap: 16px; }
.logo {
  font-weight: 700;
  letter-spacing: 0.08em;
  text-transform: uppercase;
  font-size: 13px;
  padding: 8px 14px;
  border-radius: 999px;
  border: 1px solid rgba(255,255,255,0.25);
  background: linear-gradient(to right, rgba(0,0,0,0.7), rgba(0,0,0,0.3));
}
.hero-nav a { margin-left: 18px; font-size: 13px; text-decoration: none; color: var(--text-muted); }
.hero-nav a:hover { color: #ffffff; }
.hero-main { flex: 1; display: flex; align-items: center; }
.hero-text {
  max-width: 520px;
  padding: 24px 20px;
  border-radius: var(--radius-xl);
  background: radial-gradient(circle at top, rgba(0,0,0,0.75), rgba(0,0,0,0.9));
  border: 1px solid var(--border-subtle);
  box-shadow: var(--shadow-soft);
}
.hero-text h1 { margin: 0 0 18px; font-size: clamp(32px, 5vw, 44px); line-height: 1.08; }
.hero-text p { margin: 0 0 24px; font-size: 15px; line-height: 1.6; color: var(--text-muted); }
.primary-btn {
  border: none;
  cursor: pointer;
  padding: 10px 22px;
  border-radius: 999px;
  font-size: 14px;
  font-weight: 600;
  text-transform: uppercase;
  text-decoration: none;
  background: radial-gradient(circle at 0% 0%, #ffb199, #ff5a3c);
  color: #050509;
  box-shadow: 0 10px 30px rgba(255,90,60,0.45);
  display: inline-flex;
  align-items: center;
  justify-content: center;
}
.primary-btn:disabled { opacity: 0.7; cursor: default; box-shadow: none; }
.hero-badge {
  align-self: flex-start;
  margin-top: 14px;
  padding: 6px 12px;
  font-size: 12px;
  border-radius: 999px;
  background: rgba(0,0,0,0.75);
  border: 1px solid rgba(255,255,255,0.12);
  color: var(--text-muted);
}
.section { padding: 80px 20px; }
.section-light { background: var(--bg-light); color: #14141a; }
.section-dark { background: radial-gradient(circle at top right, #171225, #050509 55%, #020208); }
.section-audio { position: relative; overflow: hidden; }
.container { max-width: var(--container-width); margin: 0 auto; }
.section h2 { margin: 0 0 12px; font-size: 28px; }
.section-intro { margin: 0 0 32px; font-size: 15px; color: #4a4a57; max-width: 560px; }
.cards-grid { display: grid; grid-template-columns: repeat(4, minmax(0, 1fr)); gap: 20px; }
.card { border-radius: var(--radius-lg); background: #ffffff; padding: 18px 18px 20px; border: 1px solid rgba(0,0,0,0.06); }
.card h3 { margin: 0 0 10px; font-size: 16px; }
.card p { margin: 0; font-size: 14px; line-height: 1.5; color: #55556a; }
.audio-container { display: flex; flex-direction: column; gap: 28px; }
.audio-header p { max-width: 580px; font-size: 15px; line-height: 1.6; color: var(--text-muted); }
.audio-grid { display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 24px; }
.audio-card {
  border-radius: 22px;
  padding: 22px 22px 18px;
  background: radial-gradient(circle at top left, rgba(13,15,35,0.95), rgba(5,5,15,0.98));
  border: 1px solid rgba(255,255,255,0.12);
  display: flex;
  flex-direction: column;
  gap: 12px;
}
.audio-card-text h3 { margin: 0 0 6px; font-size: 17px; }
.audio-card-text p { margin: 0 0 6px; font-size: 14px; line-height: 1.6; color: var(--text-muted); }
.audio-duration { display: inline-block; font-size: 12px; padding: 3px 10px; border-radius: 999px; background: rgba(255,255,255,0.06); }
.audio-player { width: 100%; }
.form-container { display: grid; grid-template-columns: minmax(0, 1.1fr) minmax(0, 1fr); gap: 32px; align-items: flex-start; }
.form-text p, .form-text ul { font-size: 14px; color: var(--text-muted); }
.form {
  padding: 20px 20px 22px;
  border-radius: var(--radius-xl);
  background: rgba(5,5,15,0.88);
  border: 1px solid rgba(255,255,255,0.1);
  box-shadow: var(--shadow-soft);
}
.field-group { display: flex; flex-direction: column; margin-bottom: 14px; }
.field-group label { font-size: 13px; margin-bottom: 4px; color: var(--text-muted); }
.field-group input, .field-group textarea {
  border-radius: 10px;
  border: 1px solid rgba(255,255,255,0.18);
  padding: 8px 10px;
  font-size: 14px;
  background: rgba(4,4,10,0.9);
  color: var(--text-main);
}
.field-group input:focus, .field-group textarea:focus { border-color: rgba(255,90,60,0.7); outline: none; }
.full-width { width: 100%; margin-top: 4px; }
.status { margin-top: 10px; font-size: 13px; }
.status-success { color: #7fda89; }
.status-error { color: #ff8a7a; }
.contact-direct { margin-top: 18px; padding-top: 14px; border-top: 1px solid rgba(255,255,255,0.15); }
.contact-link { display: block; font-size: 14px; color: #ffffff; text-decoration: none; margin-bottom: 4px; }
.footer { padding: 18px 20px 24px; background: #020207; font-size: 12px; color: rgba(255,255,255,0.45); }
.footer-inner { max-width: var(--container-width); margin: 0 auto; display: flex; justify-content: space-between; gap: 12px; flex-wrap: wrap; }
@media (max-width: 960px) {
  .cards-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  .audio-grid, .form-container { grid-template-columns: minmax(0, 1fr); }
}
@media (max-width: 640px) {
  .hero { height: auto; min-height: 620px; }
  .cards-grid { grid-template-columns: minmax(0, 1fr); }
  .section { padding: 56px 18px; }
}
"#;
