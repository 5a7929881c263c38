pub const CONTAINER: &str = "min-h-screen bg-gray-50 dark:bg-gray-900 w-full px-4 sm:px-6 lg:px-8";
pub const PAGE: &str = "flex flex-col items-center py-8 px-4 min-h-screen pt-24";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-700/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_INNER: &str = "w-full h-16 px-4 sm:px-6 lg:px-8";
pub const NAV_CONTENT: &str = "h-full flex items-center justify-between";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-[#005A9E] dark:text-white";
pub const BUTTON_LANGUAGE: &str = "px-3 py-2 text-sm font-medium rounded-lg border border-[#005A9E] text-[#005A9E] hover:bg-[#005A9E] hover:text-white transition-colors duration-200";
pub const CARD_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const BUTTON_SPIN: &str = "mt-6 px-6 py-3 rounded-full font-semibold text-white bg-[#005A9E] shadow-md hover:shadow-lg hover:scale-105 active:scale-95 transition-all duration-300";
pub const BUTTON_SPIN_DISABLED: &str = "mt-6 px-6 py-3 rounded-full font-semibold text-white bg-[#005A9E80] shadow-md opacity-50 cursor-not-allowed";
pub const BUTTON_PRIMARY: &str = "px-4 py-2 bg-[#005A9E] text-white rounded-md hover:bg-[#004682] transition-colors";
pub const BUTTON_SECONDARY: &str = "px-4 py-2 bg-gray-300 rounded-md hover:bg-gray-400 transition-colors";
pub const PRIZE_BANNER: &str = "mt-6 p-6 rounded-xl shadow-[0_4px_30px_rgba(0,0,0,0.15)] cursor-pointer max-w-[90vw] sm:max-w-md text-white bg-gradient-to-br from-[#00AEEF] to-[#005A9E] animate-pulse-subtle";
pub const MODAL_BACKDROP: &str = "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50 p-4";
pub const MODAL_CARD: &str = "bg-white p-6 rounded-lg shadow-[0_4px_20px_rgba(0,0,0,0.2)] w-full max-w-[90vw] sm:max-w-md overflow-auto max-h-[90vh]";
pub const INPUT: &str = "mt-1 p-2 w-full border rounded-md focus:ring-2 focus:ring-[#005A9E]";
pub const INPUT_ERROR: &str = "mt-1 p-2 w-full border rounded-md focus:ring-2 focus:ring-[#005A9E] border-red-500";
pub const FORM_ROW: &str = "mb-4";
pub const TEXT_H3: &str = "text-xl font-bold mb-4 text-center text-[#005A9E]";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-700";
pub const TEXT_HINT: &str = "text-sm text-gray-600 mb-4";
pub const TEXT_ERROR: &str = "text-red-500 text-xs mt-1";
pub const TEXT_SUCCESS: &str = "text-lg font-semibold text-green-600 text-center";
pub const WHEEL_FRAME: &str = "relative mt-4 w-[min(80vw,320px)] h-[min(80vw,320px)] md:w-[min(90vw,400px)] md:h-[min(90vw,400px)]";
pub const WHEEL_POINTER: &str = "absolute top-1/2 left-full -translate-y-1/2 ml-2 rotate-90 z-10 w-0 h-0 border-l-[12px] border-r-[12px] border-t-[24px] border-l-transparent border-r-transparent border-t-[#A5C93D] animate-bounce";
pub const NAV_LINKS: &str = "flex items-center gap-4";
pub const NAV_LINK: &str = "text-sm font-medium text-gray-700 dark:text-gray-200 hover:text-[#005A9E] transition-colors";
pub const PREORDER_HERO: &str = "w-full max-w-4xl rounded-xl bg-gradient-to-br from-[#8b1e2d] to-[#d4a017] text-white text-center px-6 py-12 shadow-lg";
pub const PREORDER_FORM: &str = "w-full max-w-4xl mt-8 bg-white p-6 rounded-lg shadow-md";
pub const BRANCH_CARD: &str = "bg-white p-4 rounded-lg shadow-md border border-gray-200";
pub const OPTION_CARD: &str = "bg-white border-2 border-gray-300 rounded-lg shadow-md cursor-pointer p-4 hover:shadow-lg transition-all";
pub const OPTION_CARD_SELECTED: &str = "bg-white border-2 border-[#d4a017] rounded-lg shadow-md cursor-pointer p-4 hover:shadow-lg transition-all";
pub const TEXT_SECTION: &str = "text-xl font-semibold mb-4 text-[#8b1e2d]";
pub const TEXT_PRICE: &str = "text-[#d4a017] font-bold";
pub const TEXT_TOTAL: &str = "text-lg font-bold mt-4 text-[#005A9E]";
