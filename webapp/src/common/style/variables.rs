pub const CSS_VARIABLES: &str = r#"
:root {
  /* Palette */
  --coral: #FF6B6B;
  --orange: #FF8E53;
  --amber: #F59E0B;
  --yellow: #FCD34D;
  --teal: #0D9488;
  --teal-mid: #059669;
  --green: #16A34A;
  --sky: #38BDF8;
  --indigo: #6366F1;
  --purple: #A855F7;
  --pink: #EC4899;
  --cream: #FFFDF8;
  --dark: #1A1A2E;

  /* Gradients */
  --gradient-coral: linear-gradient(135deg, var(--coral), var(--orange));
  --gradient-teal: linear-gradient(135deg, var(--teal), var(--teal-mid), var(--green));
  --gradient-rainbow: linear-gradient(90deg, var(--coral), var(--amber), var(--teal), var(--sky), var(--purple));

  /* Text Colors */
  --text-primary: var(--dark);
  --text-secondary: rgb(90, 90, 105);
  --text-tertiary: rgb(130, 130, 145);
  --text-inverse: #FFFFFF;

  /* Typography */
  --font-display: 'Cormorant Garamond', 'Playfair Display', serif;
  --font-body: 'Jost', 'Inter', system-ui, sans-serif;

  /* Layout */
  --header-height: 68px;
  --container-width: 1280px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Border Radius */
  --radius-md: 12px;
  --radius-lg: 24px;
  --radius-xl: 32px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 2px 8px rgba(0, 0, 0, 0.04);
  --shadow-md: 0 8px 32px rgba(0, 0, 0, 0.08);
  --shadow-lg: 0 48px 120px rgba(0, 0, 0, 0.5);

  /* Transitions */
  --transition-fast: 200ms;
  --transition-normal: 350ms;
  --transition-slow: 700ms;
  --easing-standard: cubic-bezier(0.4, 0, 0.2, 1);
}
"#;
